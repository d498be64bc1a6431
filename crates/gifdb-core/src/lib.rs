//! gifdb-core
//!
//! 重複のない文字列（GIF の URL や ID）のリストを JSON ファイルに保存する。
//!
//! # モジュール構成
//! - **domain**: `GifList`（順序付き、なければ追加）と `StorageError`
//! - **codec**: 保存ファイルの JSON エンコード/デコード
//! - **ports**: `EntryStore` trait
//! - **impls**: `GifStore`（JSON ファイル）と `InMemoryStore`
//! - **app**: `StoreOptions` と `StoreStatus`

pub mod app;
pub mod codec;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{StoreOptions, StoreStatus};
pub use domain::{GifList, StorageError};
pub use impls::{GifStore, InMemoryStore};
pub use ports::EntryStore;
