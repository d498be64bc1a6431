//! Impls - EntryStore の実装
//!
//! - **GifStore**: JSON ファイル、add のたびに書き出す
//! - **InMemoryStore**: 永続化なし（開発用・呼び出し側のテスト用）

pub mod in_memory;
pub mod json_file;

pub use self::in_memory::InMemoryStore;
pub use self::json_file::GifStore;
