use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::initialize::table_exists;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let db_path = cfg.database_path();
        if !db_path.exists() {
            warning(format!("Database not found: {}", db_path.display()));
            return Ok(());
        }

        let mut pool = DbPool::new(&db_path)?;
        if !table_exists(&pool.conn, "log")? {
            warning("The internal log table does not exist yet.");
            return Ok(());
        }

        LogLogic::print_log(&mut pool)?;
    }

    Ok(())
}
