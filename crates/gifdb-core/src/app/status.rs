//! Status - store の現在の状態

use serde::{Deserialize, Serialize};

/// StoreStatus は store のスナップショット（CLI の `status` で JSON 出力）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStatus {
    /// 保存ファイルのパス（open 時に渡されたまま）
    pub path: String,
    /// 保存されているエントリの件数
    pub entries: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_entry_count() {
        let status = StoreStatus {
            path: "gifs.json".to_string(),
            entries: 3,
        };
        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            serde_json::json!({ "path": "gifs.json", "entries": 3 })
        );
    }
}
