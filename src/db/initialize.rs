use rusqlite::{Connection, OptionalExtension, Result};

/// Create the `orders` table if it does not exist yet.
/// Existing tables and rows are never touched.
pub fn create_orders_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS orders (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            date           TEXT,
            customer       TEXT,
            isExternal     INTEGER,
            customerOrder  TEXT,
            customerAmount REAL,
            spiritOrder    TEXT,
            description    TEXT,
            hoursBooked    REAL
        );
        "#,
    )
}

/// Ensure that the internal `log` table exists.
pub fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

/// Initialize the database: orders table plus the internal log table.
pub fn init_db(conn: &Connection) -> Result<()> {
    create_orders_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}

/// Check if a table with the given name exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}
