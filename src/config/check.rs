//! Detect (and optionally fill) keys missing from an existing config file.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

pub const CONFIG_KEYS: [&str; 4] = ["database", "color_scheme", "net_percentage", "hour_rate"];

/// Keys of [`CONFIG_KEYS`] not present in the YAML file at `path`.
/// A missing file counts as every key missing.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(CONFIG_KEYS.to_vec());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    let map = match yaml {
        Value::Mapping(m) => m,
        Value::Null => return Ok(CONFIG_KEYS.to_vec()),
        _ => {
            return Err(AppError::Config(format!(
                "{} is not a YAML mapping",
                path.display()
            )));
        }
    };

    Ok(CONFIG_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .collect())
}

/// Report missing keys and keys with unreadable values; with `fix`,
/// rewrite the file with defaults in their place.
/// Returns the offending keys, missing ones first.
pub fn check_config(path: &Path, fix: bool) -> AppResult<Vec<&'static str>> {
    let (cfg, invalid) = Config::load_lenient(path)?;
    // a file that is not a mapping has nothing to list as present
    let mut problems = missing_keys(path).unwrap_or_else(|_| CONFIG_KEYS.to_vec());

    for key in &problems {
        warning(format!("Missing configuration key: {}", key));
    }
    for key in invalid {
        if !problems.contains(&key) {
            warning(format!("Invalid value for configuration key: {}", key));
            problems.push(key);
        }
    }

    if problems.is_empty() {
        success("Configuration file is complete.");
        return Ok(problems);
    }

    if fix {
        cfg.save_to(path)?;
        success(format!(
            "Reset {} key(s) to default values in {}",
            problems.len(),
            path.display()
        ));
    } else {
        info("Run `workhours config --check --fix` to reset them to default values.");
    }

    Ok(problems)
}
