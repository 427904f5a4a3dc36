// src/gui/components/mod.rs
pub mod scrape_panel;
pub mod filter_bar;
pub mod export_bar;
pub mod pager;
pub mod data_table;
