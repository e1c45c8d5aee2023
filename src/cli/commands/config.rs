use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::check_config;
use crate::core::config::{ConfigLogic, SettingsUpdate};
use crate::db::log::ttlog_at;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        fix,
        edit_config,
        editor,
        color_scheme,
        net_percentage,
        hour_rate,
    } = cmd
    {
        let path = Config::config_file();

        // ---- SET VALUES ----
        let update = SettingsUpdate {
            color_scheme: *color_scheme,
            net_percentage: net_percentage.clone(),
            hour_rate: hour_rate.clone(),
        };

        let mut current = cfg.clone();
        if !update.is_empty() {
            let summary = format!(
                "color_scheme={:?} net_percentage={:?} hour_rate={:?}",
                update.color_scheme.map(|c| c.as_str()),
                update.net_percentage,
                update.hour_rate
            );
            // write onto the file contents, not onto a `--db` override
            let (mut stored, _) = Config::load_lenient(&path)?;
            ConfigLogic::apply_update(&mut stored, update, &path)?;
            current.color_scheme = stored.color_scheme;
            current.net_percentage = stored.net_percentage;
            current.hour_rate = stored.hour_rate;

            // audit only when a database is already there
            let db_path = current.database_path();
            if db_path.exists()
                && let Err(e) = ttlog_at(&db_path, "config", "settings", &summary)
            {
                warning(format!("Failed to write internal log: {}", e));
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            ConfigLogic::print(&current)?;
        }

        // ---- CHECK CONFIG ----
        if *check {
            check_config(&path, *fix)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
        }
    }

    Ok(())
}
