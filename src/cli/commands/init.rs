use crate::cli::context::Context;
use crate::cli::parser::Cli;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the activity sheet with its header row, if missing
pub fn handle(cli: &Cli, ctx: &Context) -> AppResult<()> {
    println!("⚙️  Initializing rbabylog…");

    //
    // 1️⃣ CONFIGURAZIONE
    //
    if !cli.test {
        let path = ctx.cfg.save()?;
        println!("📄 Config file : {}", path.display());
    }

    //
    // 2️⃣ SHEET
    //
    if ctx.store.create()? {
        println!("🗒️  Sheet      : {} (created)", ctx.store.path().display());
    } else {
        println!("🗒️  Sheet      : {} (already present)", ctx.store.path().display());
    }

    println!("🌍 Timezone   : {}", ctx.tz);
    println!("🎉 rbabylog initialization completed!");
    Ok(())
}
