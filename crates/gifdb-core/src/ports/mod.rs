//! Ports - bot が依存する抽象化レイヤー
//!
//! bot に必要なのは「重複なし・順序付き・追加のみ」のリストだけ。JSON ファイルか
//! メモリ上かは実装の詳細（`impls` を参照）

pub mod entry_store;

pub use self::entry_store::EntryStore;
