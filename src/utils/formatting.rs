//! Formatting and parsing helpers used for CLI output and order normalization.

/// Title-case a customer name: every whitespace-separated word gets an
/// upper-case first character, the rest is lower-cased.
/// Separators are kept as typed.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if c.is_whitespace() {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

/// Parse a decimal typed by the user. `None` when the text is not a
/// finite number (empty, "abc", "NaN", "inf", ...).
pub fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a decimal, degrading anything unparsable to 0.0
pub fn parse_or_zero(s: &str) -> f64 {
    parse_number(s).unwrap_or(0.0)
}

/// "€ 204.00"
pub fn format_money(value: f64) -> String {
    format!("€ {:.2}", value)
}

/// "18 hours to book"
pub fn format_hours_to_book(hours: i64) -> String {
    format!("{} hours to book", hours)
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}
