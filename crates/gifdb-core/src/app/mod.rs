//! App - store の設定と状態表示
//!
//! - **StoreOptions**: 保存ファイルの書き方
//! - **StoreStatus**: 報告用のスナップショット

pub mod options;
pub mod status;

pub use self::options::StoreOptions;
pub use self::status::StoreStatus;
