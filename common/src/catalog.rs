//! カタログコントローラ
//!
//! 全レコード・フィルタ状態・表示結果・集計・閲覧履歴を1か所で所有する。
//! フィルタ操作のたびに全件から表示結果を再計算する（差分更新はしない）。

use crate::error::Result;
use crate::filter::{self, FilterState, DEFAULT_PRICE_CEILING};
use crate::history::{KeyValueStore, RecentHistory};
use crate::parser::parse_csv;
use crate::preset::Preset;
use crate::stats::compute_statistics;
use crate::types::{Statistics, TeaRecord};

/// 読み込み状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Error(String),
}

/// カタログ全体の状態
#[derive(Debug, Clone)]
pub struct Catalog {
    state: LoadState,
    records: Vec<TeaRecord>,
    filters: FilterState,
    price_ceiling: f64,
    /// 表示対象（records へのインデックス、元の順序）
    view: Vec<usize>,
    statistics: Statistics,
    history: RecentHistory,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            records: Vec::new(),
            filters: FilterState::default(),
            price_ceiling: DEFAULT_PRICE_CEILING,
            view: Vec::new(),
            statistics: Statistics::default(),
            history: RecentHistory::default(),
        }
    }

    /// CSVテキストから直接構築（Ready 状態）
    pub fn from_csv(text: &str) -> Self {
        let mut catalog = Self::new();
        catalog.finish_loading(Ok(text.to_string()));
        catalog
    }

    /// データ取得の完了を反映する
    ///
    /// 成功時は価格上限を求めてフィルタを初期化し、全件表示にする。
    /// 失敗時はデータセットを空にして Error 状態へ。
    pub fn finish_loading(&mut self, payload: Result<String>) {
        match payload {
            Ok(text) => {
                self.records = parse_csv(&text);
                self.price_ceiling = filter::price_ceiling(&self.records);
                self.filters = FilterState::with_price_ceiling(self.price_ceiling);
                self.statistics = compute_statistics(&self.records);
                self.state = LoadState::Ready;
                self.refresh();
                tracing::info!(
                    records = self.records.len(),
                    price_ceiling = self.price_ceiling,
                    "catalog ready"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "catalog load failed");
                self.records.clear();
                self.view.clear();
                self.statistics = Statistics::default();
                self.state = LoadState::Error(e.to_string());
            }
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    pub fn records(&self) -> &[TeaRecord] {
        &self.records
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn price_ceiling(&self) -> f64 {
        self.price_ceiling
    }

    pub fn statistics(&self) -> Statistics {
        self.statistics
    }

    /// 現在の表示対象
    pub fn view(&self) -> Vec<&TeaRecord> {
        self.view.iter().filter_map(|&i| self.records.get(i)).collect()
    }

    pub fn category_options(&self) -> Vec<String> {
        filter::category_options(&self.records)
    }

    pub fn origin_options(&self) -> Vec<String> {
        filter::origin_options(&self.records)
    }

    // =============================================
    // フィルタ操作
    // =============================================

    pub fn set_search(&mut self, term: &str) {
        self.filters.set_search(term);
        self.refresh();
    }

    pub fn set_preset(&mut self, preset: Option<Preset>) {
        self.filters.set_preset(preset);
        self.refresh();
    }

    pub fn toggle_category(&mut self, category: &str) {
        self.filters.toggle_category(category);
        self.refresh();
    }

    pub fn toggle_origin(&mut self, origin: &str) {
        self.filters.toggle_origin(origin);
        self.refresh();
    }

    pub fn set_max_price(&mut self, max: f64) {
        self.filters.set_max_price(max);
        self.refresh();
    }

    pub fn set_tag(&mut self, tag: &str) {
        self.filters.set_tag(tag);
        self.refresh();
    }

    pub fn clear_tags(&mut self) {
        self.filters.clear_tags();
        self.refresh();
    }

    /// フィルタ状態をまとめて差し替える
    pub fn replace_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.filters.reset(self.price_ceiling);
        self.refresh();
    }

    /// 表示結果を全件から再計算
    fn refresh(&mut self) {
        self.view = filter::filter_indices(&self.records, &self.filters);
    }

    // =============================================
    // 閲覧履歴
    // =============================================

    pub fn history(&self) -> &RecentHistory {
        &self.history
    }

    /// 保存済みの履歴を読み込む
    pub fn load_history(&mut self, store: &dyn KeyValueStore) -> Result<()> {
        self.history = RecentHistory::load(store)?;
        Ok(())
    }

    /// 商品を閲覧し履歴に記録する（メモリ上のみ）
    pub fn record_view(&mut self, name: &str) -> Option<&TeaRecord> {
        let record = self.records.iter().find(|r| r.display_name == name)?;
        self.history.record_view(record);
        Some(record)
    }

    /// 履歴をストアへ保存する
    ///
    /// 閲覧そのものは保存の成否に関係なく成立している。
    pub fn save_history(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        self.history.save(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::history::MemoryStore;

    const CSV: &str = "Type,Given Name,Age,Name,Grams,Bag Cost,Gram Price,Bag Size USD,Size USD,Stock,Item #,Source,Gram Cost,Tasting,Shipping
Black Tea,,,Keemun,,,$0.40,,,120,,Anhui,,Smooth and malty,
\"Green Tea, Organic\",Dragon Well,,Long Jing,,,$1.20,,,12 bags,,Zhejiang,,\"Fresh, grassy\",
Oolong,Big Red Robe,2019,Da Hong Pao,,,$2.50,,,Unknown,,Wuyi,,\"Roasted, rich\",
Ripe Pu-erh,,2008,Menghai 7572,,,$0.30,,,Out of Stock,,Yunnan,,\"Earthy, bold\",
,,,,,,,,,,,,,,
";

    fn names(catalog: &Catalog) -> Vec<String> {
        catalog.view().iter().map(|r| r.display_name.clone()).collect()
    }

    #[test]
    fn test_new_is_loading() {
        let catalog = Catalog::new();
        assert_eq!(catalog.state(), &LoadState::Loading);
        assert!(catalog.view().is_empty());
    }

    #[test]
    fn test_finish_loading_success() {
        let catalog = Catalog::from_csv(CSV);
        assert!(catalog.is_ready());
        assert_eq!(catalog.records().len(), 4);
        assert_eq!(catalog.price_ceiling(), 3.0);
        assert_eq!(catalog.filters().max_price_per_unit, 3.0);
        assert_eq!(names(&catalog), vec!["Keemun", "Long Jing", "Da Hong Pao", "Menghai 7572"]);

        let stats = catalog.statistics();
        assert_eq!(stats.total_count, 4);
        assert_eq!(stats.distinct_category_count, 4);
        assert_eq!(stats.in_stock_count, 2);
    }

    #[test]
    fn test_finish_loading_failure() {
        let mut catalog = Catalog::from_csv(CSV);
        catalog.finish_loading(Err(Error::Fetch("HTTP 500".to_string())));
        assert_eq!(catalog.state(), &LoadState::Error("Fetch error: HTTP 500".to_string()));
        assert!(catalog.records().is_empty());
        assert!(catalog.view().is_empty());
        assert_eq!(catalog.statistics(), Statistics::default());
    }

    #[test]
    fn test_mutators_recompute_view() {
        let mut catalog = Catalog::from_csv(CSV);

        catalog.set_search("robe");
        assert_eq!(names(&catalog), vec!["Da Hong Pao"]);

        catalog.set_search("");
        catalog.toggle_category("tea");
        assert_eq!(names(&catalog), vec!["Keemun", "Long Jing"]);

        catalog.toggle_origin("Anhui");
        assert_eq!(names(&catalog), vec!["Keemun"]);

        catalog.clear_filters();
        catalog.set_max_price(1.0);
        assert_eq!(names(&catalog), vec!["Keemun", "Menghai 7572"]);

        catalog.clear_filters();
        catalog.set_tag("Grassy");
        assert_eq!(names(&catalog), vec!["Long Jing"]);
        catalog.clear_tags();
        assert_eq!(catalog.view().len(), 4);
    }

    #[test]
    fn test_statistics_ignore_filters() {
        let mut catalog = Catalog::from_csv(CSV);
        catalog.set_search("keemun");
        assert_eq!(catalog.view().len(), 1);
        assert_eq!(catalog.statistics().total_count, 4);
    }

    #[test]
    fn test_presets_use_full_dataset_median() {
        let mut catalog = Catalog::from_csv(CSV);
        // 中央値 (0.40 + 1.20) / 2 = 0.80
        catalog.set_preset(Some(Preset::Value));
        assert_eq!(names(&catalog), vec!["Keemun", "Menghai 7572"]);

        catalog.set_preset(Some(Preset::Premium));
        catalog.toggle_origin("Wuyi");
        assert_eq!(names(&catalog), vec!["Da Hong Pao"]);

        catalog.set_preset(None);
        assert_eq!(names(&catalog), vec!["Da Hong Pao"]);
    }

    #[test]
    fn test_replace_filters() {
        let mut catalog = Catalog::from_csv(CSV);
        let mut filters = FilterState::with_price_ceiling(catalog.price_ceiling());
        filters.set_search("earthy");
        catalog.replace_filters(filters);
        assert_eq!(names(&catalog), vec!["Menghai 7572"]);
    }

    #[test]
    fn test_record_view_persists_history() {
        let mut store = MemoryStore::new();
        let mut catalog = Catalog::from_csv(CSV);
        catalog.load_history(&store).unwrap();
        assert!(catalog.history().is_empty());

        for name in ["Keemun", "Long Jing", "Keemun", "Da Hong Pao"] {
            assert!(catalog.record_view(name).is_some());
            catalog.save_history(&mut store).unwrap();
        }
        assert_eq!(catalog.history().names(), vec!["Da Hong Pao", "Keemun", "Long Jing"]);

        let mut reopened = Catalog::from_csv(CSV);
        reopened.load_history(&store).unwrap();
        assert_eq!(reopened.history().names(), vec!["Da Hong Pao", "Keemun", "Long Jing"]);
    }

    #[test]
    fn test_record_view_unknown_name() {
        let mut catalog = Catalog::from_csv(CSV);
        assert!(catalog.record_view("Nope").is_none());
        assert!(catalog.history().is_empty());
    }

    /// 書き込みに失敗するストア
    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_view_survives_storage_failure() {
        let mut store = FailingStore;
        let mut catalog = Catalog::from_csv(CSV);

        let opened = catalog.record_view("Long Jing").map(|r| r.display_name.clone());
        assert_eq!(opened.as_deref(), Some("Long Jing"));
        assert!(matches!(catalog.save_history(&mut store), Err(Error::Storage(_))));
        assert_eq!(catalog.history().names(), vec!["Long Jing"]);
    }

    #[test]
    fn test_filter_options() {
        let catalog = Catalog::from_csv(CSV);
        assert_eq!(
            catalog.category_options(),
            vec!["black tea", "green tea, organic", "oolong", "ripe pu-erh"]
        );
        assert_eq!(catalog.origin_options(), vec!["Anhui", "Zhejiang", "Wuyi", "Yunnan"]);
    }
}
