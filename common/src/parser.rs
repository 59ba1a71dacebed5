//! CSVパーサー
//!
//! 公開スプレッドシートのCSVを TeaRecord に変換する。
//! ダブルクォートで囲まれたフィールド内のカンマと `""` エスケープに対応。
//! 不正な行はエラーにせず、商品名が空なら読み飛ばし、列不足は空文字で補う。

use crate::types::TeaRecord;

/// CSV1行をフィールドに分割
///
/// 各フィールドは前後の空白を除去して返す。
///
/// # Examples
/// ```
/// use teajia_common::parse_csv_line;
///
/// let fields = parse_csv_line(r#"a,"b""c",d"#);
/// assert_eq!(fields, vec!["a", "b\"c", "d"]);
/// ```
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if inside_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => inside_quotes = !inside_quotes,
            ',' if !inside_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// CSVテキスト全体をパース
///
/// 1行目はヘッダとして捨てる。2行未満なら空。
pub fn parse_csv(text: &str) -> Vec<TeaRecord> {
    let lines: Vec<&str> = text.trim().split('\n').collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let mut records = Vec::with_capacity(lines.len() - 1);
    let mut skipped = 0usize;

    for line in &lines[1..] {
        let record = record_from_fields(parse_csv_line(line));
        if record.display_name.is_empty() {
            skipped += 1;
            continue;
        }
        records.push(record);
    }

    tracing::debug!(records = records.len(), skipped, "parsed catalog csv");
    records
}

/// 位置ベースで列をレコードに割り当てる
fn record_from_fields(fields: Vec<String>) -> TeaRecord {
    let field = |i: usize| fields.get(i).cloned().unwrap_or_default();

    TeaRecord {
        category: field(0),
        alternate_name: field(1),
        age_label: field(2),
        display_name: field(3),
        weight_label: field(4),
        cost_label: field(5),
        price_per_unit_label: field(6),
        bag_price_label: field(7),
        total_price_label: field(8),
        stock_label: field(9),
        item_code: field(10),
        origin_label: field(11),
        cost_per_unit_label: field(12),
        tasting_notes: field(13),
        shipping_label: field(14),
        raw_fields: fields,
    }
}
