//! 閲覧履歴ファイル
//!
//! キー → 文字列値のJSONオブジェクトをファイルに保存し、
//! コアの KeyValueStore として使う。

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use teajia_common::KeyValueStore;

/// ファイルの構造
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreContents {
    /// バージョン（互換性チェック用）
    version: u32,
    entries: BTreeMap<String, String>,
}

impl Default for StoreContents {
    fn default() -> Self {
        Self {
            version: HistoryFile::CURRENT_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// ファイルに永続化するキー・値ストア
#[derive(Debug, Clone)]
pub struct HistoryFile {
    path: PathBuf,
    contents: StoreContents,
}

impl HistoryFile {
    const CURRENT_VERSION: u32 = 1;

    /// ファイルを読み込む（存在しない・壊れている場合は空）
    pub fn open(path: &Path) -> Self {
        let contents = Self::read_contents(path).unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            contents,
        }
    }

    fn read_contents(path: &Path) -> Option<StoreContents> {
        let file = File::open(path).ok()?;
        let reader = BufReader::new(file);
        match serde_json::from_reader::<_, StoreContents>(reader) {
            Ok(contents) if contents.version == Self::CURRENT_VERSION => Some(contents),
            Ok(_) => {
                tracing::warn!(
                    path = %path.display(),
                    "history file version mismatch, starting fresh"
                );
                None
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "unreadable history file, starting fresh"
                );
                None
            }
        }
    }

    /// ファイルへ書き込む
    pub fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.contents)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for HistoryFile {
    fn get(&self, key: &str) -> teajia_common::Result<Option<String>> {
        Ok(self.contents.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> teajia_common::Result<()> {
        self.contents.entries.insert(key.to_string(), value.to_string());
        self.flush().map_err(|e| teajia_common::Error::Storage(e.to_string()))
    }
}
