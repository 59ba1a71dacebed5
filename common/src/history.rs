//! 最近見た商品
//!
//! 商品名をキーに最大 [`RECENT_LIMIT`] 件を新しい順に保持する。
//! 永続化先は [`KeyValueStore`] で抽象化し、CLIはJSONファイル、
//! Webは localStorage を使う。

use crate::error::Result;
use crate::types::TeaRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 保持件数の上限
pub const RECENT_LIMIT: usize = 5;

/// 永続化キー
pub const RECENT_STORAGE_KEY: &str = "teajiaRecent";

/// 文字列のキー・値ストア
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上のストア（テスト・一時利用向け）
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// 最近見た商品リスト
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentHistory {
    entries: Vec<TeaRecord>,
}

impl RecentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 閲覧を記録（既存の同名エントリは先頭へ移動）
    pub fn record_view(&mut self, record: &TeaRecord) {
        self.entries.retain(|r| r.display_name != record.display_name);
        self.entries.insert(0, record.clone());
        self.entries.truncate(RECENT_LIMIT);
    }

    pub fn entries(&self) -> &[TeaRecord] {
        &self.entries
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|r| r.display_name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// ストアから読み込む
    ///
    /// 値がない場合は空。壊れたJSONも空として扱い、起動を妨げない。
    pub fn load(store: &dyn KeyValueStore) -> Result<Self> {
        let Some(saved) = store.get(RECENT_STORAGE_KEY)? else {
            return Ok(Self::default());
        };

        match serde_json::from_str::<Vec<TeaRecord>>(&saved) {
            Ok(mut entries) => {
                entries.truncate(RECENT_LIMIT);
                Ok(Self { entries })
            }
            Err(e) => {
                tracing::warn!(error = %e, "discarding malformed recent history");
                Ok(Self::default())
            }
        }
    }

    /// ストアへ書き込む
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        let json = serde_json::to_string(&self.entries)?;
        store.set(RECENT_STORAGE_KEY, &json)
    }
}
