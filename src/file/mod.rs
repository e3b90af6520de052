// src/file/mod.rs
pub mod export;
pub mod prefs;
pub mod print;

pub use export::{csv_blob, export_to_csv, ExportRecord};
pub use prefs::{FilePrefs, MemPrefs, PrefStore};
pub use print::{Printer, SystemPrinter};
