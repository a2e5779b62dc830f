//! Request-scoped state handed to every command handler.

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::sheet::SheetStore;
use crate::utils::date::{self, parse_date, parse_naive_datetime};
use crate::utils::time::localize_strict;
use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

pub struct Context {
    pub cfg: Config,
    pub tz: Tz,
    pub now: DateTime<Tz>,
    pub store: SheetStore,
}

impl Context {
    pub fn new(cli: &Cli, cfg: Config) -> AppResult<Self> {
        let tz = cfg.tz()?;

        let now = match &cli.now {
            Some(s) => parse_local(&tz, s)?,
            None => date::now(&tz),
        };

        let store = SheetStore::open(cfg.sheet_path());

        Ok(Self {
            cfg,
            tz,
            now,
            store,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Parse a local "YYYY-MM-DD HH:MM:SS" in the sheet timezone.
    pub fn parse_at(&self, s: &str) -> AppResult<DateTime<Tz>> {
        parse_local(&self.tz, s)
    }

    /// Optional date argument, today when absent.
    pub fn parse_day(&self, s: Option<&String>) -> AppResult<NaiveDate> {
        match s {
            Some(d) => parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone())),
            None => Ok(self.today()),
        }
    }

    pub fn load_events(&self) -> AppResult<Vec<Event>> {
        let (_, events) = self.store.load_events(&self.tz)?;
        Ok(events)
    }
}

fn parse_local(tz: &Tz, s: &str) -> AppResult<DateTime<Tz>> {
    parse_naive_datetime(s)
        .and_then(|n| localize_strict(tz, n))
        .ok_or_else(|| AppError::InvalidDateTime(s.to_string()))
}
