use crate::export::{ExportFormat, ExportTarget};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rbabylog
/// CLI application to log baby activities to a sheet and report on them
#[derive(Parser)]
#[command(
    name = "rbabylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log baby activities (sleep, feeds, diaper changes) and see sleep and interval statistics",
    long_about = None
)]
pub struct Cli {
    /// Override the sheet path (useful for tests or a second baby)
    #[arg(global = true, long = "sheet")]
    pub sheet: Option<String>,

    /// Pin "now" to a fixed local time (YYYY-MM-DD HH:MM:SS)
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    /// Run in test mode (no config file written by init)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty sheet
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record an activity (defaults to now)
    Add {
        /// Activity label: "Slept", "Woke Up", "Fed", "Solid Food", "Diaper Change", ...
        action: String,

        #[arg(long = "note", help = "Free-text note")]
        note: Option<String>,

        #[arg(long = "at", help = "Local time of the activity (YYYY-MM-DD HH:MM:SS)")]
        at: Option<String>,
    },

    /// Show the recent history, newest first
    List {
        #[arg(long, help = "How many days back to show (default: recent_days)")]
        days: Option<i64>,
    },

    /// Sleep intervals and activity gaps of one day
    Day {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,

        #[arg(long = "events", help = "Also print the reconciled events")]
        events: bool,
    },

    /// Rolling daily summary
    Summary {
        #[arg(long, help = "Number of days (default: summary_days)")]
        days: Option<usize>,
    },

    /// 24-hour sleep/awake bar for one day
    Timeline {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,

        #[arg(long, default_value_t = 48, help = "Bar width in characters")]
        width: usize,
    },

    /// Time since the last activity of each kind
    Status,

    /// Edit a recent entry, identified by its date and time
    Edit {
        #[arg(long = "at", help = "Entry to edit (YYYY-MM-DD HH:MM:SS)")]
        at: String,

        #[arg(long = "action")]
        action: Option<String>,

        #[arg(long = "note")]
        note: Option<String>,

        #[arg(long = "time", help = "New time of day (HH:MM:SS)")]
        time: Option<String>,
    },

    /// Delete a recent entry, identified by its date and time
    Del {
        #[arg(long = "at", help = "Entry to delete (YYYY-MM-DD HH:MM:SS)")]
        at: String,
    },

    /// Export events or the daily summary
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "events")]
        what: ExportTarget,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter events by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, help = "Number of days for --what summary")]
        days: Option<usize>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
