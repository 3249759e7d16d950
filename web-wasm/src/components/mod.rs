//! UIコンポーネント

pub mod data_entry_form;
pub mod document_viewer;
pub mod fallback_image;
pub mod header;
pub mod maintenance_menu;
pub mod progress_bar;
pub mod scan_preview;
pub mod scanned_files_list;
pub mod scanner_controls;
pub mod shelving_metadata;
pub mod toaster;
