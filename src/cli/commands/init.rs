use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::store::OrderStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite schema (orders + internal log)
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ CONFIGURATION
    //
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing workhours…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", db_path.display());

    //
    // 2️⃣ SCHEMA
    //
    let store = OrderStore::new(&db_path);
    store.ensure_schema()?;

    println!("✅ Database initialized at {}", db_path.display());

    //
    // 3️⃣ INTERNAL LOG (non blocking)
    //
    if let Err(e) = log::ttlog_at(
        &db_path,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_path.display()),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 workhours initialization completed!");
    Ok(())
}
