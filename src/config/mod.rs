use crate::errors::{AppError, AppResult};
use crate::models::color_scheme::ColorScheme;
use crate::ui::messages::warning;
use crate::utils::formatting::parse_or_zero;
use crate::utils::path::{expand_tilde, resolve_db_path};
use check::CONFIG_KEYS;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod check;

/// Application settings, loaded once at startup and handed to every command.
///
/// `net_percentage` and `hour_rate` are kept as typed by the user; use
/// [`Config::net_percentage_value`] / [`Config::hour_rate_value`] to read
/// them as numbers (unparsable text reads as 0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    #[serde(default)]
    pub net_percentage: String,
    #[serde(default)]
    pub hour_rate: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            color_scheme: ColorScheme::System,
            net_percentage: String::new(),
            hour_rate: String::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("workhours")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".workhours")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("workhours.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("workhours.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Like [`Config::load_from`], but a bad value never fails the load:
    /// each unreadable key keeps its default and is returned by name.
    /// A file that is not a YAML mapping at all reports every key.
    pub fn load_lenient(path: &Path) -> AppResult<(Self, Vec<&'static str>)> {
        match Self::load_from(path) {
            Ok(cfg) => return Ok((cfg, Vec::new())),
            Err(AppError::Yaml(_)) => {}
            Err(e) => return Err(e),
        }

        let content = fs::read_to_string(path)?;
        let map = match serde_yaml::from_str::<Value>(&content) {
            Ok(Value::Mapping(m)) => m,
            _ => return Ok((Self::default(), CONFIG_KEYS.to_vec())),
        };

        let mut cfg = Self::default();
        let mut invalid = Vec::new();
        for key in CONFIG_KEYS {
            let ok = match key {
                "database" => read_key(&map, key, &mut cfg.database),
                "color_scheme" => read_key(&map, key, &mut cfg.color_scheme),
                "net_percentage" => read_key(&map, key, &mut cfg.net_percentage),
                _ => read_key(&map, key, &mut cfg.hour_rate),
            };
            if !ok {
                invalid.push(key);
            }
        }

        Ok((cfg, invalid))
    }

    /// Load the standard config file for the `config` command, which must
    /// keep working on a broken file so it can be repaired.
    pub fn load_for_repair() -> AppResult<Self> {
        let path = Self::config_file();
        let (cfg, invalid) = Self::load_lenient(&path)?;
        for key in invalid {
            warning(format!(
                "Invalid value for '{}' in {}, using the default",
                key,
                path.display()
            ));
        }
        Ok(cfg)
    }

    /// Persist the configuration to the standard config file
    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Database path with `~/` expanded
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn net_percentage_value(&self) -> f64 {
        parse_or_zero(&self.net_percentage)
    }

    pub fn hour_rate_value(&self) -> f64 {
        parse_or_zero(&self.hour_rate)
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => resolve_db_path(&name, &dir),
            None => Self::database_file(),
        };

        // Keep rates and color scheme of an existing config
        let mut config = Self::load().unwrap_or_default();
        config.database = db_path.to_string_lossy().to_string();

        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Config(format!(
                    "cannot create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        Ok(db_path)
    }
}

/// Deserialize `map[key]` into `slot`. An absent key leaves the default in
/// place; returns false only when the value is present but unreadable.
fn read_key<T: DeserializeOwned>(map: &Mapping, key: &str, slot: &mut T) -> bool {
    let Some(value) = map.get(key) else {
        return true;
    };
    match serde_yaml::from_value(value.clone()) {
        Ok(v) => {
            *slot = v;
            true
        }
        Err(_) => false,
    }
}
