//! データセット全体の集計
//!
//! フィルタ結果ではなく常に全レコードを対象にする。

use crate::normalizer::extract_stock_quantity;
use crate::types::{Statistics, TeaRecord};
use std::collections::HashSet;

/// 集計値を計算
pub fn compute_statistics(records: &[TeaRecord]) -> Statistics {
    let distinct_categories: HashSet<&str> = records.iter().map(|r| r.category.as_str()).collect();

    Statistics {
        total_count: records.len(),
        distinct_category_count: distinct_categories.len(),
        in_stock_count: records.iter().filter(|r| is_in_stock(&r.stock_label)).count(),
    }
}

/// 在庫ありと見なすか
///
/// 数字を含まない文言（"Available" など）は数量 1 として扱う。
pub fn is_in_stock(stock_label: &str) -> bool {
    let lower = stock_label.to_lowercase();
    if lower.is_empty() || lower == "unknown" || lower == "out of stock" {
        return false;
    }

    let has_digits = stock_label.chars().any(|c| c.is_ascii_digit());
    let quantity = if has_digits {
        extract_stock_quantity(stock_label)
    } else {
        1
    };
    quantity > 0
}
