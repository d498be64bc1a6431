//! InMemoryStore - 永続化しない EntryStore
//!
//! 追加のルールは `GifStore` と同じ。ファイルシステムには触らない。
//! `EntryStore` だけに依存する bot のコードを試すのに使う。

use crate::domain::{GifList, StorageError};
use crate::ports::EntryStore;

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    gifs: GifList,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存のリストをそのまま初期値にする
    pub fn with_entries(entries: Vec<String>) -> Self {
        Self {
            gifs: GifList::from_entries(entries),
        }
    }
}

impl EntryStore for InMemoryStore {
    fn list(&self) -> &[String] {
        self.gifs.as_slice()
    }

    fn contains(&self, value: &str) -> bool {
        self.gifs.contains(value)
    }

    fn add(&mut self, value: &str) -> Result<bool, StorageError> {
        match self.gifs.with_appended(value) {
            Some(next) => {
                self.gifs = next;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
