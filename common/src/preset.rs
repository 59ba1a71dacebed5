//! プリセット（名前付きフィルタ）
//!
//! テイスティングノートのキーワード一致、または中央値価格との比較で
//! レコードを絞り込む。中央値は渡されたスライス上で計算する。

use crate::types::TeaRecord;
use serde::{Deserialize, Serialize};

const BEGINNER_KEYWORDS: &[&str] = &["smooth", "mellow", "mild", "light", "beginner", "easy"];
const BOLD_KEYWORDS: &[&str] = &["bold", "strong", "robust", "intense", "rich", "deep"];

/// プリセット種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// 飲みやすい（smooth, mellow ...）
    Beginners,
    /// 中央値より高い
    Premium,
    /// 中央値より安い（価格不明は除く）
    Value,
    /// しっかりした味（bold, strong ...）
    Bold,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Beginners, Preset::Premium, Preset::Value, Preset::Bold];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Beginners => "beginners",
            Preset::Premium => "premium",
            Preset::Value => "value",
            Preset::Bold => "bold",
        }
    }

    /// ボタン表示名
    pub fn label(&self) -> &'static str {
        match self {
            Preset::Beginners => "For Beginners",
            Preset::Premium => "Premium",
            Preset::Value => "Best Value",
            Preset::Bold => "Bold & Strong",
        }
    }

    /// レコードがこのプリセットに該当するか
    pub fn matches(&self, record: &TeaRecord, median: f64) -> bool {
        match self {
            Preset::Beginners => notes_contain_any(record, BEGINNER_KEYWORDS),
            Preset::Bold => notes_contain_any(record, BOLD_KEYWORDS),
            Preset::Premium => record.price() > median,
            Preset::Value => {
                let price = record.price();
                price > 0.0 && price < median
            }
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginners" | "beginner" => Ok(Preset::Beginners),
            "premium" => Ok(Preset::Premium),
            "value" => Ok(Preset::Value),
            "bold" => Ok(Preset::Bold),
            _ => Err(format!("Unknown preset: {}. Use beginners, premium, value, or bold", s)),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn notes_contain_any(record: &TeaRecord, keywords: &[&str]) -> bool {
    let notes = record.tasting_notes.to_lowercase();
    keywords.iter().any(|k| notes.contains(k))
}

/// 価格の中央値（0 は価格なしとして除外、空なら 0）
pub fn median_price<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a TeaRecord>,
{
    let mut prices: Vec<f64> = records
        .into_iter()
        .map(TeaRecord::price)
        .filter(|p| *p > 0.0)
        .collect();

    if prices.is_empty() {
        return 0.0;
    }

    prices.sort_by(f64::total_cmp);
    let mid = prices.len() / 2;
    if prices.len() % 2 == 1 {
        prices[mid]
    } else {
        (prices[mid - 1] + prices[mid]) / 2.0
    }
}

/// プリセットで絞り込む（None は全件通過）
pub fn filter_by_preset<'a>(
    records: &[&'a TeaRecord],
    preset: Option<Preset>,
) -> Vec<&'a TeaRecord> {
    let Some(preset) = preset else {
        return records.to_vec();
    };

    let median = median_price(records.iter().copied());
    records
        .iter()
        .copied()
        .filter(|r| preset.matches(r, median))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(name: &str, price: &str) -> TeaRecord {
        TeaRecord {
            display_name: name.to_string(),
            price_per_unit_label: price.to_string(),
            ..Default::default()
        }
    }

    fn noted(name: &str, notes: &str) -> TeaRecord {
        TeaRecord {
            display_name: name.to_string(),
            tasting_notes: notes.to_string(),
            ..Default::default()
        }
    }

    fn names(records: &[&TeaRecord]) -> Vec<String> {
        records.iter().map(|r| r.display_name.clone()).collect()
    }

    // =============================================
    // 中央値
    // =============================================

    #[test]
    fn test_median_even() {
        let records = vec![priced("a", "4"), priced("b", "1"), priced("c", "3"), priced("d", "2")];
        assert_eq!(median_price(&records), 2.5);
    }

    #[test]
    fn test_median_odd_and_single() {
        let records = vec![priced("a", "$5")];
        assert_eq!(median_price(&records), 5.0);

        let records = vec![priced("a", "9"), priced("b", "1"), priced("c", "3")];
        assert_eq!(median_price(&records), 3.0);
    }

    #[test]
    fn test_median_ignores_missing_prices() {
        let records = vec![priced("a", ""), priced("b", "ask"), priced("c", "0"), priced("d", "2")];
        assert_eq!(median_price(&records), 2.0);
    }

    #[test]
    fn test_median_empty() {
        let records: Vec<TeaRecord> = Vec::new();
        assert_eq!(median_price(&records), 0.0);
        assert_eq!(median_price(&[priced("a", "n/a")]), 0.0);
    }

    // =============================================
    // プリセット
    // =============================================

    #[test]
    fn test_value_preset() {
        let records = vec![
            priced("p1", "1"),
            priced("p2", "2"),
            priced("p3", "3"),
            priced("p4", "4"),
            priced("none", ""),
        ];
        let refs: Vec<&TeaRecord> = records.iter().collect();
        assert_eq!(names(&filter_by_preset(&refs, Some(Preset::Value))), vec!["p1", "p2"]);
    }

    #[test]
    fn test_premium_preset() {
        let records = vec![
            priced("p1", "1"),
            priced("p2", "2"),
            priced("p3", "3"),
            priced("p4", "4"),
        ];
        let refs: Vec<&TeaRecord> = records.iter().collect();
        assert_eq!(names(&filter_by_preset(&refs, Some(Preset::Premium))), vec!["p3", "p4"]);
    }

    #[test]
    fn test_premium_with_no_prices_is_empty() {
        let records = vec![priced("a", ""), priced("b", "")];
        let refs: Vec<&TeaRecord> = records.iter().collect();
        assert!(filter_by_preset(&refs, Some(Preset::Premium)).is_empty());
        assert!(filter_by_preset(&refs, Some(Preset::Value)).is_empty());
    }

    #[test]
    fn test_keyword_presets() {
        let records = vec![
            noted("gentle", "Mild and EASY drinking"),
            noted("strong", "Deep, robust body"),
            noted("plain", "Vegetal"),
        ];
        let refs: Vec<&TeaRecord> = records.iter().collect();
        assert_eq!(names(&filter_by_preset(&refs, Some(Preset::Beginners))), vec!["gentle"]);
        assert_eq!(names(&filter_by_preset(&refs, Some(Preset::Bold))), vec!["strong"]);
    }

    #[test]
    fn test_no_preset_is_identity() {
        let records = vec![noted("a", ""), noted("b", "")];
        let refs: Vec<&TeaRecord> = records.iter().collect();
        assert_eq!(filter_by_preset(&refs, None).len(), 2);
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("premium".parse::<Preset>().unwrap(), Preset::Premium);
        assert_eq!(" Bold ".parse::<Preset>().unwrap(), Preset::Bold);
        assert!("cheap".parse::<Preset>().is_err());
        for preset in Preset::ALL {
            assert_eq!(preset.as_str().parse::<Preset>().unwrap(), preset);
        }
    }
}
