pub mod header;
pub mod stats_bar;
pub mod filter_sidebar;
pub mod tea_grid;
pub mod tea_modal;
pub mod recent_viewed;
