use crate::models::order::WorkOrder;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Insert one normalized order and return the id SQLite assigned to it.
pub fn insert_order(conn: &Connection, order: &WorkOrder) -> Result<i64> {
    let mut stmt = conn.prepare(
        "INSERT INTO orders (date, customer, isExternal, customerOrder, customerAmount, spiritOrder, description, hoursBooked)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;

    stmt.execute(params![
        order.date_str(),
        order.customer,
        order.kind.to_db_int(),
        order.customer_order,
        order.customer_amount,
        order.spirit_order,
        order.description,
        order.hours_booked,
    ])?;

    Ok(conn.last_insert_rowid())
}

pub fn count_orders(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM orders", [], |row| row.get(0))
}

/// First and last order date, if any order exists.
pub fn order_date_range(conn: &Connection) -> Result<Option<(String, String)>> {
    conn.query_row(
        "SELECT MIN(date), MAX(date) FROM orders WHERE date IS NOT NULL",
        [],
        |row| {
            let first: Option<String> = row.get(0)?;
            let last: Option<String> = row.get(1)?;
            Ok(first.zip(last))
        },
    )
    .optional()
    .map(Option::flatten)
}
