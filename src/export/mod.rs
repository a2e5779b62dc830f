// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod range;

pub use logic::ExportLogic;
pub use model::{EventExport, SummaryExport};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// What gets written to the output file.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ExportTarget {
    /// Raw sheet events
    #[default]
    Events,
    /// Rolling daily summary
    Summary,
}
