//! 茶種の分類と表示設定

use serde::{Deserialize, Serialize};

/// 表示上の茶種区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeaType {
    Dark,
    Oolong,
    Red,
    Green,
    White,
    Flower,
    Other,
}

impl TeaType {
    /// 自由記述の茶種文字列を区分に振り分ける
    ///
    /// 判定順は固定（"Dark Oolong" は Dark になる）。
    pub fn classify(category: &str) -> Self {
        let normalized = category.trim().to_lowercase();
        let has = |needle: &str| normalized.contains(needle);

        if has("dark") || has("puerh") || has("pu-erh") {
            TeaType::Dark
        } else if has("oolong") {
            TeaType::Oolong
        } else if has("red") {
            TeaType::Red
        } else if has("green") {
            TeaType::Green
        } else if has("white") {
            TeaType::White
        } else if has("flower") || has("floral") {
            TeaType::Flower
        } else {
            TeaType::Other
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TeaType::Dark => "Dark/Pu-erh",
            TeaType::Oolong => "Oolong",
            TeaType::Red => "Red Tea",
            TeaType::Green => "Green Tea",
            TeaType::White => "White Tea",
            TeaType::Flower => "Flower Tea",
            TeaType::Other => "Tea",
        }
    }

    /// カード背景パターンのCSSクラス
    pub fn pattern_class(&self) -> &'static str {
        match self {
            TeaType::Dark | TeaType::Other => "pattern-dark",
            TeaType::Oolong => "pattern-oolong",
            TeaType::Red => "pattern-red",
            TeaType::Green => "pattern-green",
            TeaType::White => "pattern-white",
            TeaType::Flower => "pattern-flower",
        }
    }
}

const EMOJI_KEYWORDS: &[(&str, &str)] = &[
    ("dark", "🏺"),
    ("oolong", "☕"),
    ("green", "🍃"),
    ("red", "❤️"),
    ("white", "⚪"),
    ("flower", "🌸"),
];

/// 茶種文字列に対応するアイコン
///
/// [`TeaType::classify`] とは別のキーワード表で判定する（"Pu-erh" や "Floral" は既定の 🍵）。
pub fn emoji_for(category: &str) -> &'static str {
    let normalized = category.to_lowercase();
    EMOJI_KEYWORDS
        .iter()
        .find(|(key, _)| normalized.contains(key))
        .map(|(_, emoji)| *emoji)
        .unwrap_or("🍵")
}

impl std::fmt::Display for TeaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
