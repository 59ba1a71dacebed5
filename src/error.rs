use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeajiaError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("データ取得に失敗: {0}")]
    Fetch(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("商品が見つかりません: {0}")]
    RecordNotFound(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] teajia_common::Error),
}

pub type Result<T> = std::result::Result<T, TeajiaError>;
