use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;
use std::path::Path;

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Open the database just for the audit line, then close it again.
pub fn ttlog_at(db_path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let conn = Connection::open(db_path)?;
    ttlog(&conn, operation, target, message)
}
