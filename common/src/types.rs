//! カタログの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - TeaRecord: CSV1行分の商品レコード（読み込み後は不変）
//! - Statistics: データセット全体の集計値

use crate::normalizer::{self, StockStatus};
use crate::tea_type::{self, TeaType};
use serde::{Deserialize, Serialize};

/// 商品レコード
///
/// 最近見た商品としてそのまま永続化されるため、
/// 全フィールドに `default` を付けて旧形式の読み込みにも耐える。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeaRecord {
    pub category: String,             // 茶種（自由記述）
    pub alternate_name: String,       // 英語名など
    pub age_label: String,            // 年代
    pub display_name: String,         // 商品名（必須）
    pub weight_label: String,         // 内容量
    pub cost_label: String,           // 仕入れ値
    pub price_per_unit_label: String, // グラム単価（例: "$0.85"）
    pub bag_price_label: String,
    pub total_price_label: String,
    pub stock_label: String,          // 在庫（数値または文言）
    pub item_code: String,
    pub origin_label: String,         // 産地・仕入れ先
    pub cost_per_unit_label: String,
    pub tasting_notes: String,
    pub shipping_label: String,

    /// 元の列値（未マッピング列を含む）
    pub raw_fields: Vec<String>,
}

impl TeaRecord {
    /// グラム単価（抽出できなければ 0）
    pub fn price(&self) -> f64 {
        normalizer::extract_price(&self.price_per_unit_label)
    }

    /// 表示用の単価テキスト
    pub fn price_display(&self) -> &str {
        normalizer::extract_price_text(&self.price_per_unit_label).unwrap_or("N/A")
    }

    /// フレーバータグ
    pub fn tags(&self) -> Vec<String> {
        normalizer::extract_tags(&self.tasting_notes)
    }

    pub fn stock_status(&self) -> StockStatus {
        normalizer::stock_status(&self.stock_label)
    }

    pub fn tea_type(&self) -> TeaType {
        TeaType::classify(&self.category)
    }

    pub fn emoji(&self) -> &'static str {
        tea_type::emoji_for(&self.category)
    }

    /// 年代が意味を持つか（空・"0"・"Unknown" は表示しない）
    pub fn has_meaningful_age(&self) -> bool {
        !self.age_label.is_empty() && self.age_label != "0" && self.age_label != "Unknown"
    }

    /// カード見出し: 商品名（年代）
    pub fn title_display(&self) -> String {
        if self.has_meaningful_age() {
            format!("{} ({})", self.display_name, self.age_label)
        } else {
            self.display_name.clone()
        }
    }
}

/// データセット全体の集計値
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_count: usize,
    pub distinct_category_count: usize,
    pub in_stock_count: usize,
}
