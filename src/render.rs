//! ターミナル表示
//!
//! カード一覧・詳細・集計・最近見た商品をプレーンテキストに整形する。

use teajia_common::{Statistics, TeaRecord};

const RULE: &str = "────────────────────────────────────────";

/// カード1枚分
pub fn format_card(record: &TeaRecord) -> String {
    let tea_type = record.tea_type();
    let stock = record.stock_status();
    let tags = record.tags();

    let mut lines = vec![
        format!("{} {}  [{}]", record.emoji(), record.title_display(), tea_type.label()),
        format!("   ${}/g", record.price_display()),
    ];
    if !record.origin_label.is_empty() {
        lines.push(format!("   {}", record.origin_label));
    }
    if !tags.is_empty() {
        lines.push(format!("   #{}", tags.join(" #")));
    }
    lines.push(format!("   在庫: {}", stock.text));
    lines.join("\n")
}

/// カード一覧
pub fn format_cards(records: &[&TeaRecord]) -> String {
    if records.is_empty() {
        return "該当する商品がありません".to_string();
    }
    records
        .iter()
        .map(|r| format_card(r))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// 詳細表示
pub fn format_detail(record: &TeaRecord) -> String {
    let tea_type = record.tea_type();
    let stock = record.stock_status();

    let mut lines = vec![format!("{} {}", record.emoji(), record.display_name)];
    if !record.alternate_name.is_empty() {
        lines.push(format!("   {}", record.alternate_name));
    }
    lines.push(format!("[{}]", tea_type.label()));
    lines.push(RULE.to_string());

    let source = if record.origin_label.is_empty() {
        "Not specified"
    } else {
        record.origin_label.as_str()
    };
    lines.push(format!("産地: {}", source));
    lines.push(format!("茶種: {}", record.category));
    if record.has_meaningful_age() {
        lines.push(format!("年代: {}", record.age_label));
    }
    if !record.weight_label.is_empty() {
        lines.push(format!("内容量: {}", record.weight_label));
    }

    lines.push(RULE.to_string());
    let notes = if record.tasting_notes.is_empty() {
        "See tasting notes"
    } else {
        record.tasting_notes.as_str()
    };
    lines.push(format!("テイスティング: {}", notes));

    lines.push(RULE.to_string());
    lines.push(format!("グラム単価: ${}", record.price_display()));
    if !record.item_code.is_empty() {
        lines.push(format!("商品番号: {}", record.item_code));
    }
    if !record.shipping_label.is_empty() {
        lines.push(format!("送料: {}", record.shipping_label));
    }
    lines.push(format!("在庫: {}", stock.text));

    lines.join("\n")
}

/// 集計表示
pub fn format_statistics(stats: &Statistics) -> String {
    format!(
        "商品数: {}  茶種: {}  在庫あり: {}",
        stats.total_count, stats.distinct_category_count, stats.in_stock_count
    )
}

/// 最近見た商品
pub fn format_recent(names: &[&str]) -> String {
    if names.is_empty() {
        return "最近見た商品はありません".to_string();
    }
    names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {}", i + 1, name))
        .collect::<Vec<_>>()
        .join("\n")
}
