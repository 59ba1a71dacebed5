use crate::error::{Result, TeajiaError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 公開スプレッドシートのCSV
pub const DEFAULT_DATA_SOURCE: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSdkRy61map_HCqtlujOt_N-1Q5m3ZA6n9pRUsmgrOL1kaWdNpEEHfqMWL5rPcM5WCNIqoGDQ7QiKX9/pub?output=csv";

/// データソースを上書きする環境変数
pub const DATA_SOURCE_ENV: &str = "TEAJIA_DATA_SOURCE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CSVのURLまたはローカルパス
    pub data_source: String,
    /// 閲覧履歴ファイル（未指定なら設定ディレクトリ）
    pub history_path: Option<PathBuf>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.into(),
            history_path: None,
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TeajiaError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("teajia"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// データソース（環境変数を優先）
    pub fn data_source(&self) -> String {
        match std::env::var(DATA_SOURCE_ENV) {
            Ok(source) if !source.trim().is_empty() => source,
            _ => self.data_source.clone(),
        }
    }

    pub fn set_data_source(&mut self, source: String) -> Result<()> {
        self.data_source = source;
        self.save()
    }

    /// 閲覧履歴ファイルのパス
    pub fn history_path(&self) -> Result<PathBuf> {
        match &self.history_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("recent.json")),
        }
    }
}
