//! GifList - 順序付きエントリ一覧（なければ追加）

use serde::{Deserialize, Serialize};

/// GifList はエントリの順序付きリスト
///
/// - 挿入順を保つ
/// - `with_appended` は重複を作らない
/// - ロード時（`from_entries`, deserialize）は重複も含めてそのまま保持する
///
/// シリアライズ結果は文字列の JSON 配列そのもの
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GifList {
    entries: Vec<String>,
}

impl GifList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存済みのリストをそのまま包む
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// 完全一致、線形探索
    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|entry| entry == value)
    }

    /// `value` を末尾に追加した新しいリストを返す。既にあれば `None`
    ///
    /// `self` は変更しない（書き込みに成功してから差し替えるため）
    pub fn with_appended(&self, value: &str) -> Option<GifList> {
        if self.contains(value) {
            return None;
        }
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend_from_slice(&self.entries);
        entries.push(value.to_string());
        Some(Self { entries })
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}
