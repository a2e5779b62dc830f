use crate::core::calculator::summary::OpenSleepPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::night_window::NightWindow;
use crate::utils::path::expand_tilde;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_sheet")]
    pub sheet: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_night_start")]
    pub night_start_hour: u32,
    #[serde(default = "default_night_end")]
    pub night_end_hour: u32,
    #[serde(default = "default_summary_days")]
    pub summary_days: usize,
    #[serde(default = "default_recent_days")]
    pub recent_days: i64,
    #[serde(default)]
    pub open_sleep_policy: OpenSleepPolicy,
}

fn default_sheet() -> String {
    Config::sheet_file().to_string_lossy().to_string()
}
fn default_timezone() -> String {
    "Asia/Kolkata".to_string()
}
fn default_night_start() -> u32 {
    22
}
fn default_night_end() -> u32 {
    7
}
fn default_summary_days() -> usize {
    7
}
fn default_recent_days() -> i64 {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet: default_sheet(),
            timezone: default_timezone(),
            night_start_hour: default_night_start(),
            night_end_hour: default_night_end(),
            summary_days: default_summary_days(),
            recent_days: default_recent_days(),
            open_sleep_policy: OpenSleepPolicy::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rbabylog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbabylog.conf")
    }

    /// Return the default path of the activity sheet
    pub fn sheet_file() -> PathBuf {
        Self::config_dir().join("baby_tracking.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let cfg: Config = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)?
        } else {
            Config::default()
        };

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save(&self) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        fs::write(&path, serde_yaml::to_string(self)?)?;
        Ok(path)
    }

    pub fn validate(&self) -> AppResult<()> {
        for (name, h) in [
            ("night_start_hour", self.night_start_hour),
            ("night_end_hour", self.night_end_hour),
        ] {
            if h > 23 {
                return Err(AppError::Config(format!("{name} must be 0..=23, got {h}")));
            }
        }
        if self.summary_days == 0 {
            return Err(AppError::Config("summary_days must be at least 1".into()));
        }
        self.tz().map(|_| ())
    }

    pub fn tz(&self) -> AppResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| AppError::InvalidTimezone(self.timezone.clone()))
    }

    pub fn night_window(&self) -> NightWindow {
        NightWindow::new(self.night_start_hour, self.night_end_hour)
    }

    pub fn sheet_path(&self) -> PathBuf {
        expand_tilde(&self.sheet)
    }
}
