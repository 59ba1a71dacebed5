//! フィルタエンジン
//!
//! FilterState と全レコードから表示対象を導出する純粋関数群。
//! 結果は常に元の並び順を保つ。
//!
//! ## 評価順
//! 1. プリセット
//! 2. 茶種（部分一致・大文字小文字無視）
//! 3. 価格上限（常に適用）
//! 4. 産地（完全一致）
//! 5. 検索語（名前・別名・産地・ノート・茶種のいずれかに部分一致）
//! 6. タグ（抽出タグとの共通部分）

use crate::normalizer::extract_tags;
use crate::preset::{median_price, Preset};
use crate::types::TeaRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 価格を持つレコードがないときの上限
pub const DEFAULT_PRICE_CEILING: f64 = 100.0;

/// 現在のフィルタ選択
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    /// 入力されたままの検索語（表示用）
    pub search_input: String,
    /// 小文字化済みの検索語（空なら無効）
    pub search_term: String,
    pub active_preset: Option<Preset>,
    /// 小文字化済みの茶種（空なら全件）
    pub selected_categories: BTreeSet<String>,
    /// グラム単価の上限（この値を含む）
    pub max_price_per_unit: f64,
    /// 産地（完全一致、空なら全件）
    pub selected_origins: BTreeSet<String>,
    pub active_tags: BTreeSet<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_price_ceiling(DEFAULT_PRICE_CEILING)
    }
}

impl FilterState {
    pub fn with_price_ceiling(ceiling: f64) -> Self {
        Self {
            search_input: String::new(),
            search_term: String::new(),
            active_preset: None,
            selected_categories: BTreeSet::new(),
            max_price_per_unit: ceiling,
            selected_origins: BTreeSet::new(),
            active_tags: BTreeSet::new(),
        }
    }

    pub fn set_search(&mut self, term: &str) {
        self.search_input = term.to_string();
        self.search_term = term.to_lowercase();
    }

    pub fn set_preset(&mut self, preset: Option<Preset>) {
        self.active_preset = preset;
    }

    /// 茶種の選択を切り替える（戻り値は切り替え後に選択されているか）
    pub fn toggle_category(&mut self, category: &str) -> bool {
        toggle(&mut self.selected_categories, category.to_lowercase())
    }

    pub fn toggle_origin(&mut self, origin: &str) -> bool {
        toggle(&mut self.selected_origins, origin.to_string())
    }

    pub fn set_max_price(&mut self, max: f64) {
        self.max_price_per_unit = max;
    }

    /// カード上のタグクリック: そのタグだけに絞る
    pub fn set_tag(&mut self, tag: &str) {
        self.active_tags.clear();
        self.active_tags.insert(tag.to_string());
    }

    pub fn clear_tags(&mut self) {
        self.active_tags.clear();
    }

    /// すべての選択を解除し、価格上限を戻す
    pub fn reset(&mut self, ceiling: f64) {
        *self = Self::with_price_ceiling(ceiling);
    }

    /// 既定状態から変更があるか
    pub fn is_active(&self, ceiling: f64) -> bool {
        *self != Self::with_price_ceiling(ceiling)
    }
}

fn toggle(set: &mut BTreeSet<String>, value: String) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}

/// フィルタを適用して表示対象を返す
pub fn apply_filters<'a>(records: &'a [TeaRecord], state: &FilterState) -> Vec<&'a TeaRecord> {
    filter_indices(records, state)
        .into_iter()
        .filter_map(|i| records.get(i))
        .collect()
}

/// フィルタを通過するレコードのインデックス（昇順）
pub fn filter_indices(records: &[TeaRecord], state: &FilterState) -> Vec<usize> {
    // プリセットは最初に適用されるため、中央値は常に全件で計算する
    let median = state.active_preset.map(|_| median_price(records));
    let search = state.search_term.to_lowercase();

    let indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| passes(r, state, median, &search))
        .map(|(i, _)| i)
        .collect();

    tracing::debug!(total = records.len(), shown = indices.len(), "applied filters");
    indices
}

fn passes(record: &TeaRecord, state: &FilterState, median: Option<f64>, search: &str) -> bool {
    if let (Some(preset), Some(median)) = (state.active_preset, median) {
        if !preset.matches(record, median) {
            return false;
        }
    }

    matches_category(record, &state.selected_categories)
        && record.price() <= state.max_price_per_unit
        && (state.selected_origins.is_empty()
            || state.selected_origins.contains(&record.origin_label))
        && (search.is_empty() || matches_search(record, search))
        && matches_tags(record, &state.active_tags)
}

fn matches_category(record: &TeaRecord, categories: &BTreeSet<String>) -> bool {
    if categories.is_empty() {
        return true;
    }
    let category = record.category.to_lowercase();
    categories.iter().any(|c| category.contains(c.as_str()))
}

fn matches_search(record: &TeaRecord, term: &str) -> bool {
    [
        &record.display_name,
        &record.alternate_name,
        &record.origin_label,
        &record.tasting_notes,
        &record.category,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(term))
}

fn matches_tags(record: &TeaRecord, active: &BTreeSet<String>) -> bool {
    if active.is_empty() {
        return true;
    }
    let tags = extract_tags(&record.tasting_notes);
    active
        .iter()
        .any(|want| tags.iter().any(|t| t.eq_ignore_ascii_case(want)))
}

/// 茶種フィルタの選択肢（小文字化・初出順・重複なし）
pub fn category_options(records: &[TeaRecord]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for record in records {
        let category = record.category.to_lowercase();
        if !options.contains(&category) {
            options.push(category);
        }
    }
    options
}

/// 産地フィルタの選択肢（空を除く・初出順・重複なし）
pub fn origin_options(records: &[TeaRecord]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for record in records {
        if !record.origin_label.is_empty() && !options.contains(&record.origin_label) {
            options.push(record.origin_label.clone());
        }
    }
    options
}

/// 価格スライダーの上限: 正の最大単価の切り上げ
pub fn price_ceiling(records: &[TeaRecord]) -> f64 {
    records
        .iter()
        .map(TeaRecord::price)
        .filter(|p| *p > 0.0)
        .fold(None, |max: Option<f64>, p| Some(max.map_or(p, |m| m.max(p))))
        .map(f64::ceil)
        .unwrap_or(DEFAULT_PRICE_CEILING)
}
