//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// CSVの不正行は読み飛ばし・空文字補完で吸収するため、ここには現れない。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
