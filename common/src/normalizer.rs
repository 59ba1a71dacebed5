//! 自由記述フィールドの数値・タグ抽出
//!
//! 価格・在庫ラベルから数値を取り出し、テイスティングノートから
//! 表示用のフレーバータグを導出する。どの関数も失敗せず、
//! 該当なしの場合は 0 または空を返す。

use regex::Regex;
use serde::{Deserialize, Serialize};

/// フレーバータグの語彙（この順序でタグを採用する）
pub const FLAVOR_KEYWORDS: &[&str] = &[
    "smooth", "bold", "mellow", "floral", "earthy", "fruity", "sweet", "bitter",
    "roasted", "fresh", "bright", "creamy", "spicy", "grassy", "woody", "honey",
    "light", "dark", "rich", "delicate", "robust", "intense", "gentle",
];

/// 1レコードあたりのタグ上限
pub const MAX_TAGS: usize = 2;

/// 在庫少の閾値（この数未満で Low）
pub const LOW_STOCK_THRESHOLD: u64 = 50;

lazy_static::lazy_static! {
    // ASCII数字のみ（全角数字は数値として扱わない）
    static ref PRICE_RE: Regex = Regex::new(r"[0-9]+\.?[0-9]*").unwrap();
    static ref QUANTITY_RE: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// 価格ラベル中の最初の数値部分を返す
///
/// ```
/// use teajia_common::normalizer::extract_price_text;
///
/// assert_eq!(extract_price_text("$0.85/g"), Some("0.85"));
/// assert_eq!(extract_price_text("ask"), None);
/// ```
pub fn extract_price_text(label: &str) -> Option<&str> {
    PRICE_RE.find(label).map(|m| m.as_str())
}

/// 価格ラベルから数値を抽出（見つからなければ 0）
pub fn extract_price(label: &str) -> f64 {
    extract_price_text(label)
        .and_then(|text| text.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// 在庫ラベルから最初の整数を抽出（見つからなければ 0）
pub fn extract_stock_quantity(label: &str) -> u64 {
    QUANTITY_RE
        .find(label)
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// 在庫レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockLevel {
    OutOfStock,
    Low,
    Good,
}

impl StockLevel {
    /// 表示用CSSクラス
    pub fn css_class(&self) -> &'static str {
        match self {
            StockLevel::OutOfStock => "stock-out",
            StockLevel::Low => "stock-low",
            StockLevel::Good => "stock-good",
        }
    }
}

/// 在庫表示（レベル + 表示テキスト）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockStatus {
    pub level: StockLevel,
    pub text: String,
}

/// 在庫ラベルから在庫表示を導出
pub fn stock_status(label: &str) -> StockStatus {
    match extract_stock_quantity(label) {
        0 => StockStatus {
            level: StockLevel::OutOfStock,
            text: "Out of Stock".to_string(),
        },
        q if q < LOW_STOCK_THRESHOLD => StockStatus {
            level: StockLevel::Low,
            text: format!("{} (Low)", label),
        },
        _ => StockStatus {
            level: StockLevel::Good,
            text: label.to_string(),
        },
    }
}

/// テイスティングノートからフレーバータグを抽出
///
/// 語彙順に大文字始まりで最大 [`MAX_TAGS`] 件。
pub fn extract_tags(tasting_notes: &str) -> Vec<String> {
    if tasting_notes.is_empty() {
        return Vec::new();
    }

    let lower = tasting_notes.to_lowercase();
    let mut tags: Vec<String> = Vec::new();

    for keyword in FLAVOR_KEYWORDS {
        if tags.len() >= MAX_TAGS {
            break;
        }
        if lower.contains(keyword) {
            let tag = capitalize(keyword);
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }

    tags
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
