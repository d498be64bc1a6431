//! Domain - エントリ一覧とエラー型

pub mod errors;
pub mod gif_list;

pub use self::errors::StorageError;
pub use self::gif_list::GifList;
