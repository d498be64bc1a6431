//! Errors - 保存ファイルの読み書きで発生するエラー

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// StorageError は store の失敗しうる操作すべてが返すエラー
///
/// 内部ではリトライしない。どうするかは呼び出し側が決める。
#[derive(Debug, Error)]
pub enum StorageError {
    /// ファイルはあるが開けない・読めない
    #[error("cannot read gif database at {path}")]
    NotReadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON として不正、または文字列の配列ではない
    #[error("gif database at {path} is not a JSON array of strings")]
    MalformedContent {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// 一時ファイルの書き込み、または rename に失敗
    #[error("cannot write gif database at {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot encode gif list: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StorageError {
    /// 関係する保存ファイルのパス（あれば）
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            StorageError::NotReadable { path, .. }
            | StorageError::MalformedContent { path, .. }
            | StorageError::WriteFailed { path, .. } => Some(path),
            StorageError::Encode(_) => None,
        }
    }
}
