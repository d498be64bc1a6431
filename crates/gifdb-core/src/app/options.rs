//! StoreOptions - JSON ファイル store の設定

use serde::{Deserialize, Serialize};

/// `GifStore` を開くときの設定
///
/// bot 側の設定ファイルに埋め込めるよう Deserialize を実装。
/// 省略したフィールドはデフォルト値になる。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// 1 行ではなくインデント付き JSON で書く
    pub pretty: bool,
}
