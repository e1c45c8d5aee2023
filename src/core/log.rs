use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const OP_WIDTH: usize = 40;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// ANSI color for a log operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "config" => Colour::Yellow,
        "vacuum" => Colour::Blue,
        "init" => Colour::RGB(225, 183, 126),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: Option<String> = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target.unwrap_or_default(), message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let mut op_target = color_for_operation(&operation)
                .paint(operation.as_str())
                .to_string();
            if !target.is_empty() {
                op_target.push_str(&format!(" ({})", target));
            }

            // padding on the visible width, without ANSI codes
            let padding = " ".repeat(OP_WIDTH.saturating_sub(strip_ansi(&op_target).chars().count()));

            println!(
                "{:>id_w$}: {} | {}{} => {}",
                id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
