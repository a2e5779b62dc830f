// src/export/logic.rs

use crate::core::calculator::summary::{OpenSleepPolicy, rolling_summary};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{EventExport, SummaryExport};
use crate::export::range::parse_range;
use crate::export::{ExportFormat, ExportTarget};
use crate::models::event::{Event, sort_chronological};
use crate::ui::messages::warning;
use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

/// Inputs of a summary export.
pub struct SummaryRequest {
    pub now: DateTime<Tz>,
    pub days: usize,
    pub policy: OpenSleepPolicy,
}

impl ExportLogic {
    /// Export degli eventi o del riepilogo giornaliero.
    ///
    /// - `file`: path assoluto del file di output
    /// - `range`: `None`, `"all"` oppure espressioni come `YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD` e `START:END` (solo per gli eventi)
    pub fn export(
        events: &[Event],
        format: ExportFormat,
        target: ExportTarget,
        file: &str,
        range: &Option<String>,
        summary: &SummaryRequest,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        match target {
            ExportTarget::Events => {
                let rows = Self::select_events(events, range)?;
                if rows.is_empty() {
                    warning("No events found for selected range.");
                    return Ok(());
                }
                write(&rows, format, path)
            }
            ExportTarget::Summary => {
                let rows: Vec<SummaryExport> = rolling_summary(
                    events,
                    summary.now.date_naive(),
                    summary.days,
                    summary.now,
                    summary.policy,
                )
                .iter()
                .map(SummaryExport::from)
                .collect();
                write(&rows, format, path)
            }
        }
    }

    /// Events inside `range`, oldest first.
    pub fn select_events(events: &[Event], range: &Option<String>) -> AppResult<Vec<EventExport>> {
        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let mut selected: Vec<Event> = events
            .iter()
            .filter(|e| bounds.is_none_or(|(start, end)| e.date >= start && e.date <= end))
            .cloned()
            .collect();
        sort_chronological(&mut selected);

        Ok(selected.iter().map(EventExport::from).collect())
    }
}

fn write<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}
