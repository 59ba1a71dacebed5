//! Teajia Catalog Common Library
//!
//! CLIとWeb(WASM)で共有される型・パーサー・フィルタエンジン

pub mod types;
pub mod tea_type;
pub mod error;
pub mod parser;
pub mod normalizer;
pub mod preset;
pub mod filter;
pub mod stats;
pub mod history;
pub mod catalog;

pub use types::{Statistics, TeaRecord};
pub use tea_type::{emoji_for, TeaType};
pub use error::{Error, Result};
pub use parser::{parse_csv, parse_csv_line};
pub use normalizer::{
    extract_price, extract_stock_quantity, extract_tags, stock_status, StockLevel, StockStatus,
};
pub use preset::{filter_by_preset, median_price, Preset};
pub use filter::{apply_filters, price_ceiling, FilterState};
pub use stats::compute_statistics;
pub use history::{KeyValueStore, MemoryStore, RecentHistory, RECENT_LIMIT, RECENT_STORAGE_KEY};
pub use catalog::{Catalog, LoadState};
