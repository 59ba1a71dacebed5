//! データ取得モジュール
//!
//! http(s) のURLは reqwest で取得し、それ以外はローカルファイルとして読む。
//! 失敗時のリトライはしない。

use crate::error::{Result, TeajiaError};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use teajia_common::Catalog;

/// データソースの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Remote(String),
    Local(std::path::PathBuf),
}

impl DataSource {
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        if source.starts_with("http://") || source.starts_with("https://") {
            DataSource::Remote(source.to_string())
        } else {
            let path = source.strip_prefix("file://").unwrap_or(source);
            DataSource::Local(Path::new(path).to_path_buf())
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Remote(url) => write!(f, "{}", url),
            DataSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// CSVテキストを取得
pub async fn load_dataset(source: &DataSource, timeout_seconds: u64) -> Result<String> {
    match source {
        DataSource::Remote(url) => fetch_remote(url, timeout_seconds).await,
        DataSource::Local(path) => read_local(path),
    }
}

async fn fetch_remote(url: &str, timeout_seconds: u64) -> Result<String> {
    tracing::debug!(url, "fetching catalog");

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()?;
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(TeajiaError::Fetch(format!("HTTP {}", response.status())));
    }

    Ok(response.text().await?)
}

fn read_local(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(TeajiaError::FileNotFound(path.display().to_string()));
    }
    tracing::debug!(path = %path.display(), "reading catalog file");
    Ok(std::fs::read_to_string(path)?)
}

/// データを取得してカタログを構築
///
/// 取得に失敗した場合は load_dataset のエラーをそのまま返す。
pub async fn load_catalog(
    source: &DataSource,
    timeout_seconds: u64,
    show_progress: bool,
) -> Result<Catalog> {
    let mut catalog = Catalog::new();

    let spinner = if show_progress {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("カタログを取得中... {}", source));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let payload = load_dataset(source, timeout_seconds).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let text = payload.inspect_err(|e| tracing::error!(error = %e, "catalog load failed"))?;
    catalog.finish_loading(Ok(text));
    Ok(catalog)
}
