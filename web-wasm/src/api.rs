//! カタログCSVの取得

use gloo::net::http::Request;
use teajia_common::{Error, Result};

/// 公開スプレッドシートのCSV
pub const CATALOG_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSdkRy61map_HCqtlujOt_N-1Q5m3ZA6n9pRUsmgrOL1kaWdNpEEHfqMWL5rPcM5WCNIqoGDQ7QiKX9/pub?output=csv";

/// CSVテキストを取得（リトライなし）
pub async fn fetch_csv(url: &str) -> Result<String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| Error::Fetch(e.to_string()))?;

    if !response.ok() {
        return Err(Error::Fetch(format!("HTTP {}", response.status())));
    }

    response.text().await.map_err(|e| Error::Fetch(e.to_string()))
}
