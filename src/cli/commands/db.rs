use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::table_exists;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let db_path = cfg.database_path();
        if !db_path.exists() {
            warning(format!(
                "Database not found: {} (run `workhours init` first)",
                db_path.display()
            ));
            return Ok(());
        }

        let mut pool = DbPool::new(&db_path)?;

        if !*check && !*vacuum && !*show_info {
            info("Nothing to do: use --info, --check or --vacuum.");
        }

        //
        // 1) INFO
        //
        if *show_info {
            if table_exists(&pool.conn, "orders")? {
                stats::print_db_info(&mut pool, &db_path)?;
            } else {
                warning("The orders table does not exist yet.");
            }
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);

            pool.conn.execute_batch("VACUUM;")?;

            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);

            if table_exists(&pool.conn, "log")?
                && let Err(e) = ttlog(&pool.conn, "vacuum", "", "Database vacuumed")
            {
                warning(format!("Failed to write internal log: {}", e));
            }
        }
    }

    Ok(())
}
