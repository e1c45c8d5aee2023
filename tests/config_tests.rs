use std::env;
use std::fs;
use std::path::PathBuf;
use workhours::config::Config;
use workhours::config::check::{CONFIG_KEYS, check_config, missing_keys};
use workhours::models::color_scheme::ColorScheme;
use workhours::utils::path::resolve_db_path;

fn temp_conf(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_workhours.conf", name));
    fs::remove_file(&path).ok();
    path
}

#[test]
fn test_missing_file_gives_defaults() {
    let path = temp_conf("cfg_missing");
    let cfg = Config::load_from(&path).expect("load defaults");

    assert_eq!(cfg.color_scheme, ColorScheme::System);
    assert_eq!(cfg.net_percentage, "");
    assert_eq!(cfg.hour_rate, "");
    assert_eq!(cfg.net_percentage_value(), 0.0);
    assert_eq!(cfg.hour_rate_value(), 0.0);
}

#[test]
fn test_save_and_reload_roundtrip() {
    let path = temp_conf("cfg_roundtrip");
    let cfg = Config {
        database: "/tmp/orders.sqlite".to_string(),
        color_scheme: ColorScheme::Dark,
        net_percentage: "12.5".to_string(),
        hour_rate: "80".to_string(),
    };

    cfg.save_to(&path).expect("save config");
    let loaded = Config::load_from(&path).expect("reload config");

    assert_eq!(loaded, cfg);
    assert_eq!(loaded.net_percentage_value(), 12.5);
    assert_eq!(loaded.hour_rate_value(), 80.0);
}

#[test]
fn test_partial_file_uses_serde_defaults() {
    let path = temp_conf("cfg_partial");
    fs::write(&path, "hour_rate: \"50\"\ncolor_scheme: light\n").unwrap();

    let cfg = Config::load_from(&path).expect("load partial config");
    assert_eq!(cfg.hour_rate, "50");
    assert_eq!(cfg.color_scheme, ColorScheme::Light);
    assert_eq!(cfg.net_percentage, "");
    assert!(cfg.database.ends_with("workhours.sqlite"));

    let missing = missing_keys(&path).expect("missing keys");
    assert_eq!(missing, vec!["database", "net_percentage"]);
}

#[test]
fn test_unparsable_rates_read_as_zero() {
    let cfg = Config {
        net_percentage: "ten".to_string(),
        hour_rate: "12,50".to_string(),
        ..Config::default()
    };
    assert_eq!(cfg.net_percentage_value(), 0.0);
    assert_eq!(cfg.hour_rate_value(), 0.0);
}

#[test]
fn test_invalid_color_scheme_is_a_parse_error() {
    let path = temp_conf("cfg_bad_scheme");
    fs::write(&path, "color_scheme: purple\n").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_missing_keys_on_absent_file() {
    let path = temp_conf("cfg_absent_keys");
    assert_eq!(missing_keys(&path).unwrap(), CONFIG_KEYS.to_vec());
}

#[test]
fn test_tilde_database_is_expanded() {
    let cfg = Config {
        database: "~/orders.sqlite".to_string(),
        ..Config::default()
    };
    let path = cfg.database_path();
    assert!(!path.to_string_lossy().starts_with('~'));
    assert!(path.ends_with("orders.sqlite"));
}

#[test]
fn test_color_scheme_resolution() {
    assert_eq!(ColorScheme::Dark.as_str(), "dark");
    assert_eq!(ColorScheme::Light.resolve(), ColorScheme::Light);
    assert_eq!(ColorScheme::Dark.resolve(), ColorScheme::Dark);
}

#[test]
fn test_lenient_load_keeps_readable_keys() {
    let path = temp_conf("cfg_lenient");
    fs::write(&path, "color_scheme: purple\nhour_rate: \"50\"\n").unwrap();

    let (cfg, invalid) = Config::load_lenient(&path).expect("lenient load");
    assert_eq!(invalid, vec!["color_scheme"]);
    assert_eq!(cfg.color_scheme, ColorScheme::System);
    assert_eq!(cfg.hour_rate, "50");
}

#[test]
fn test_lenient_load_on_non_mapping_reports_every_key() {
    let path = temp_conf("cfg_lenient_list");
    fs::write(&path, "- a\n- b\n").unwrap();

    let (cfg, invalid) = Config::load_lenient(&path).expect("lenient load");
    assert_eq!(invalid, CONFIG_KEYS.to_vec());
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_check_config_fix_resets_bad_values() {
    let path = temp_conf("cfg_check_fix_bad");
    fs::write(&path, "color_scheme: purple\nhour_rate: \"50\"\n").unwrap();

    let problems = check_config(&path, true).expect("check and fix");
    assert!(problems.contains(&"color_scheme"));
    assert!(problems.contains(&"database"));

    let cfg = Config::load_from(&path).expect("fixed file loads");
    assert_eq!(cfg.color_scheme, ColorScheme::System);
    assert_eq!(cfg.hour_rate, "50");
    assert!(check_config(&path, false).expect("recheck").is_empty());
}

#[test]
fn test_relative_db_name_lands_in_base_dir() {
    let base = env::temp_dir().join("wh_base");
    assert_eq!(resolve_db_path("rel.sqlite", &base), base.join("rel.sqlite"));
    assert_eq!(
        resolve_db_path("/abs/orders.sqlite", &base),
        PathBuf::from("/abs/orders.sqlite")
    );
}
