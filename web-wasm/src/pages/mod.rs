//! 画面

pub mod data_entry_page;
pub mod not_found;
pub mod scan_page;
