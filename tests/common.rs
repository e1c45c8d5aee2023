#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, with HOME (and APPDATA) pointed at a private directory so
/// no test reads or writes the real configuration.
pub fn wh(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("workhours");
    cmd.env("HOME", home).env("APPDATA", home).env_remove("COLORFGBG");
    cmd
}

/// Create a unique, empty home directory inside the system temp dir
pub fn setup_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_workhours_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_workhours.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Path of the config file the binary uses for a given test home
pub fn config_file(home: &str) -> PathBuf {
    PathBuf::from(home).join(".workhours").join("workhours.conf")
}

/// Init the DB in test mode (no config file written)
pub fn init_db(home: &str, db_path: &str) {
    wh(home)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Write the rate settings through the CLI
pub fn set_rates(home: &str, net_percentage: &str, hour_rate: &str) {
    wh(home)
        .args([
            "config",
            "--net-percentage",
            net_percentage,
            "--hour-rate",
            hour_rate,
        ])
        .assert()
        .success();
}

/// Count rows of the orders table
pub fn count_orders(db_path: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row("SELECT COUNT(*) FROM orders", [], |row| row.get(0))
        .expect("count orders")
}

#[derive(Debug)]
pub struct OrderRow {
    pub id: i64,
    pub date: String,
    pub customer: String,
    pub is_external: i64,
    pub customer_order: String,
    pub customer_amount: f64,
    pub spirit_order: String,
    pub description: String,
    pub hours_booked: f64,
}

/// Read back all orders, oldest first
pub fn load_orders(db_path: &str) -> Vec<OrderRow> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    let mut stmt = conn
        .prepare(
            "SELECT id, date, customer, isExternal, customerOrder, customerAmount,
                    spiritOrder, description, hoursBooked
             FROM orders ORDER BY id ASC",
        )
        .expect("prepare select");

    stmt.query_map([], |row| {
        Ok(OrderRow {
            id: row.get(0)?,
            date: row.get(1)?,
            customer: row.get(2)?,
            is_external: row.get(3)?,
            customer_order: row.get(4)?,
            customer_amount: row.get(5)?,
            spirit_order: row.get(6)?,
            description: row.get(7)?,
            hours_booked: row.get(8)?,
        })
    })
    .expect("query orders")
    .map(|r| r.expect("map order"))
    .collect()
}
