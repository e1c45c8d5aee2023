use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse an optional `--date` argument, defaulting to today
pub fn parse_optional_date(s: Option<&String>) -> Option<NaiveDate> {
    match s {
        Some(v) => parse_date(v),
        None => Some(today()),
    }
}
