// src/export/mod.rs

mod fs_utils;
pub mod logic;
mod model;
pub mod report;

pub use fs_utils::write_report;
pub use logic::ExportLogic;
pub use model::EntryExport;
pub(crate) use model::{entries_to_table, get_headers};
pub use report::build_payroll_report;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path, count: usize) {
    success(format!(
        "{label} export completed: {} ({} entries)",
        path.display(),
        count
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
