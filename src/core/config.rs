use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::color_scheme::ColorScheme;
use crate::ui::messages::{error, success, warning};
use crate::utils::parse_number;
use std::path::Path;
use std::process::Command;

/// Values to change in the settings; `None` leaves a field as it is.
#[derive(Debug, Default)]
pub struct SettingsUpdate {
    pub color_scheme: Option<ColorScheme>,
    pub net_percentage: Option<String>,
    pub hour_rate: Option<String>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.color_scheme.is_none() && self.net_percentage.is_none() && self.hour_rate.is_none()
    }
}

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg)?;
        println!("📄 Current configuration:\n");
        println!("{}", yaml);
        println!(
            "Effective values: net percentage {} %, hour rate {}",
            cfg.net_percentage_value(),
            cfg.hour_rate_value()
        );
        Ok(())
    }

    /// Apply the update to `cfg` and write it to `path`.
    /// Rate and percentage text is stored as typed.
    pub fn apply_update(cfg: &mut Config, update: SettingsUpdate, path: &Path) -> AppResult<()> {
        if let Some(scheme) = update.color_scheme {
            cfg.color_scheme = scheme;
            success(format!("Color scheme set to '{}'", scheme.as_str()));
        }
        if let Some(pct) = update.net_percentage {
            if parse_number(&pct).is_none() && !pct.is_empty() {
                warning(format!("'{}' is not a number, it will count as 0", pct));
            }
            success(format!("Net percentage set to '{}'", pct));
            cfg.net_percentage = pct;
        }
        if let Some(rate) = update.hour_rate {
            if parse_number(&rate).is_none() && !rate.is_empty() {
                warning(format!("'{}' is not a number, it will count as 0", rate));
            }
            success(format!("Hour rate set to '{}'", rate));
            cfg.hour_rate = rate;
        }

        cfg.save_to(path)
    }

    /// Open the config file in an editor, falling back to the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                return Ok(());
            }
            Ok(_) | Err(_) => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));
            }
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            Ok(_) | Err(_) => {
                error(format!(
                    "Failed to edit configuration file using fallback '{}'",
                    default_editor
                ));
                Err(AppError::Config(format!(
                    "no usable editor for {}",
                    path.display()
                )))
            }
        }
    }
}
