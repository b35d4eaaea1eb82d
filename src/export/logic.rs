// src/export/logic.rs

use crate::core::collection::{EntryFilter, filter_entries};
use crate::db::store::TimesheetStore;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::write_report;
use crate::export::model::EntryExport;
use crate::export::report::build_payroll_report;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::timesheet_entry::TimesheetEntry;
use crate::ui::messages::info;
use std::path::Path;

/// High-level export of the filtered timesheet collection.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the entries matching `filter` to `path`.
    ///
    /// - `Csv`: the payroll report (details + totals per employee)
    /// - `Json`: the flat entries, pretty-printed
    ///
    /// An empty selection is an error and no file is written.
    pub fn export<S: TimesheetStore>(
        store: &S,
        format: ExportFormat,
        path: &Path,
        filter: &EntryFilter,
        force: bool,
    ) -> AppResult<usize> {
        let all = store.query()?;
        let selected = filter_entries(&all, filter);

        info(format!(
            "Exporting {} entries to {}: {}",
            selected.len(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        let content = Self::render(format, &selected)?;
        write_report(path, &content, force)?;

        notify_export_success(&format.as_str().to_uppercase(), path, selected.len());
        Ok(selected.len())
    }

    /// File content for `entries` in `format`.
    pub fn render(format: ExportFormat, entries: &[TimesheetEntry]) -> AppResult<String> {
        match format {
            ExportFormat::Csv => build_payroll_report(entries),
            ExportFormat::Json => {
                if entries.is_empty() {
                    return Err(AppError::Validation(
                        "No timesheets available in the selected range.".into(),
                    ));
                }
                let flat: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();
                serde_json::to_string_pretty(&flat)
                    .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
            }
        }
    }
}
