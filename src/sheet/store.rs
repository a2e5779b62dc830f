//! CSV file standing in for the remote spreadsheet.

use crate::errors::AppResult;
use crate::models::event::Event;
use crate::sheet::diff::ChangePlan;
use crate::sheet::table::SheetTable;
use chrono_tz::Tz;
use csv::{ReaderBuilder, WriterBuilder};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

pub struct SheetStore {
    path: PathBuf,
}

impl SheetStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with the default header row if it does not exist.
    /// Returns false when the file was already there.
    pub fn create(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        self.write_table(&SheetTable::with_default_headers())?;
        Ok(true)
    }

    pub fn read_table(&self) -> AppResult<SheetTable> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut values = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            values.push(rec.iter().map(|s| s.to_string()).collect::<Vec<_>>());
        }

        debug!("read {} rows from {}", values.len(), self.path.display());
        Ok(SheetTable::from_values(values))
    }

    pub fn load_events(&self, tz: &Tz) -> AppResult<(SheetTable, Vec<Event>)> {
        let table = self.read_table()?;
        let events = table.to_events(tz)?;
        Ok((table, events))
    }

    /// Append one event at the end of the sheet; returns its row number.
    pub fn append(&self, event: &Event) -> AppResult<usize> {
        let mut table = self.read_table()?;
        if table.headers.is_empty() {
            table = SheetTable::with_default_headers();
        }
        table.check_schema()?;

        table.rows.push(event.to_row(&table.headers));
        let row = table.rows.len() + 1;
        self.write_table(&table)?;
        Ok(row)
    }

    pub fn apply(&self, plan: &ChangePlan) -> AppResult<()> {
        if plan.is_empty() {
            return Ok(());
        }
        let mut table = self.read_table()?;
        table.apply(plan);
        self.write_table(&table)
    }

    fn write_table(&self, table: &SheetTable) -> AppResult<()> {
        let mut wtr = WriterBuilder::new().flexible(true).from_path(&self.path)?;
        wtr.write_record(&table.headers)?;
        for row in &table.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
