//! rbabylog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod sheet;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::context::Context;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, ctx),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, ctx),
        Commands::Day { .. } => cli::commands::day::handle(&cli.command, ctx),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, ctx),
        Commands::Timeline { .. } => cli::commands::timeline::handle(&cli.command, ctx),
        Commands::Status => cli::commands::status::handle(&cli.command, ctx),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, ctx),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta
    let mut cfg = Config::load()?;

    // 3️⃣ applica eventuale override dello sheet da riga di comando
    if let Some(custom_sheet) = &cli.sheet {
        cfg.sheet = custom_sheet.clone();
    }

    // 4️⃣ contesto della richiesta (timezone, "now", sheet)
    let ctx = Context::new(&cli, cfg)?;

    dispatch(&cli, &ctx)
}
