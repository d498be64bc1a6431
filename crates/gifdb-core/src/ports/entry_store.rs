//! EntryStore port - エントリ一覧の抽象化

use crate::domain::StorageError;

/// EntryStore は重複のない順序付きエントリ一覧
///
/// # 契約
/// - `list` は挿入順に返す
/// - `add` は追加したら `Ok(true)`、既にあれば `Ok(false)`
///   （後者では何も変わらない）
/// - `Err` のときは呼び出し前の状態のまま
///
/// 実装は排他制御しない。呼び出し側で直列化すること。
pub trait EntryStore {
    fn list(&self) -> &[String];

    fn contains(&self, value: &str) -> bool {
        self.list().iter().any(|entry| entry == value)
    }

    fn add(&mut self, value: &str) -> Result<bool, StorageError>;
}
