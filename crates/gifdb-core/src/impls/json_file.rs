//! GifStore - JSON ファイルを正本とするエントリ一覧
//!
//! # 永続化
//! - open: ファイルがあれば読み込み、なければ `[]` を書いて作成
//! - add: 追加に成功するたびにファイル全体を書き直す
//! - 書き込みは同じディレクトリの一時ファイルに行い、rename で置き換える
//!   （途中で失敗しても書きかけのファイルは残らない）
//! - 既存ファイルのパーミッションは引き継ぎ、symlink は辿って実体を置き換える

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::app::{StoreOptions, StoreStatus};
use crate::codec;
use crate::domain::{GifList, StorageError};
use crate::ports::EntryStore;

/// GifStore は重複のない文字列の順序付きリストを JSON ファイルに保存する
///
/// メモリ上のリストは常に `path` に最後に書いた配列と一致する。
///
/// # 並行性
/// 排他制御はしない。同じ path に複数の store を開いたり、複数プロセスで
/// ファイルを共有すると書き込みが上書きされうる。1 ファイルにつき 1 store、
/// 1 スレッドから使うこと。
///
/// # 使用例
/// ```no_run
/// use gifdb_core::GifStore;
///
/// let mut store = GifStore::open("gifs.json")?;
/// assert!(store.add("https://media.example/cat.gif")?);
/// assert!(!store.add("https://media.example/cat.gif")?);
/// # Ok::<(), gifdb_core::StorageError>(())
/// ```
#[derive(Debug)]
pub struct GifStore {
    path: PathBuf,
    gifs: GifList,
    options: StoreOptions,
}

impl GifStore {
    /// デフォルト設定で `path` の store を開く（なければ作成）
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Self::open_with(path, StoreOptions::default())
    }

    pub fn open_with(path: impl AsRef<Path>, options: StoreOptions) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        match fs::read(&path) {
            Ok(bytes) => {
                let gifs = codec::decode(&path, &bytes)?;
                debug!(path = %path.display(), entries = gifs.len(), "loaded gif database");
                Ok(Self { path, gifs, options })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let gifs = GifList::new();
                write_atomic(&path, &codec::encode(&gifs, options.pretty)?)?;
                debug!(path = %path.display(), "created empty gif database");
                Ok(Self { path, gifs, options })
            }
            Err(source) => Err(StorageError::NotReadable { path, source }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 挿入順のエントリ一覧
    pub fn list(&self) -> &[String] {
        self.gifs.as_slice()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.gifs.contains(value)
    }

    pub fn len(&self) -> usize {
        self.gifs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gifs.is_empty()
    }

    /// `value` がなければ末尾に追加し、リスト全体を書き出す
    ///
    /// - 既にあれば `Ok(false)`（ファイルには触らない）
    /// - 書き込みに失敗した場合、メモリ上のリストは変わらない
    pub fn add(&mut self, value: &str) -> Result<bool, StorageError> {
        let Some(next) = self.gifs.with_appended(value) else {
            debug!(value, "gif already stored");
            return Ok(false);
        };

        let bytes = codec::encode(&next, self.options.pretty)?;
        if let Err(e) = write_atomic(&self.path, &bytes) {
            warn!(path = %self.path.display(), error = %e, "failed to persist gif database");
            return Err(e);
        }

        self.gifs = next;
        debug!(value, entries = self.gifs.len(), "gif added");
        Ok(true)
    }

    pub fn status(&self) -> StoreStatus {
        StoreStatus {
            path: self.path.display().to_string(),
            entries: self.gifs.len(),
        }
    }
}

impl EntryStore for GifStore {
    fn list(&self) -> &[String] {
        GifStore::list(self)
    }

    fn contains(&self, value: &str) -> bool {
        GifStore::contains(self, value)
    }

    fn add(&mut self, value: &str) -> Result<bool, StorageError> {
        GifStore::add(self, value)
    }
}

/// `bytes` を隣の一時ファイルに書き、`path` の実体へ rename する
///
/// - `path` が symlink ならリンク先を置き換える（リンク自体は残す）
/// - 既存ファイルのパーミッションを引き継ぐ。新規作成時は umask に従う
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let write_failed = |source: io::Error| StorageError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(write_failed(e)),
    };
    let existing = match fs::metadata(&target) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(write_failed(e)),
    };

    // "gifs.json" の parent は "" になる
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".gifdb-");
    if let Some(permissions) = existing.clone().or_else(new_file_permissions) {
        builder.permissions(permissions);
    }

    let mut tmp = builder.tempfile_in(dir).map_err(write_failed)?;
    tmp.write_all(bytes).map_err(write_failed)?;
    // umask で削られた分を戻す
    if let Some(permissions) = existing {
        tmp.as_file().set_permissions(permissions).map_err(write_failed)?;
    }
    tmp.as_file().sync_all().map_err(write_failed)?;
    tmp.persist(&target).map_err(|e| write_failed(e.error))?;
    Ok(())
}

/// 新規ファイルは 0o666（umask 適用後、通常 0o644）
#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}
