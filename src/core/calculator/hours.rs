use crate::config::Config;
use crate::utils::formatting::parse_or_zero;

/// Whole hours represented by `net_amount` after deducting `net_percentage`
/// percent, at `hour_rate` per hour.
///
/// hours = floor((net - net * pct / 100) / (rate == 0 ? 1 : rate))
///
/// Not clamped: negative amounts (or a percentage above 100) give negative
/// hours.
pub fn derived_hours(net_amount: f64, net_percentage: f64, hour_rate: f64) -> i64 {
    let divisor = if hour_rate == 0.0 { 1.0 } else { hour_rate };
    let net = net_amount - (net_amount * net_percentage / 100.0);
    (net / divisor).floor() as i64
}

/// Same as [`derived_hours`] on raw user text; each unparsable field is 0.
pub fn derived_hours_from_text(amount: &str, net_percentage: &str, hour_rate: &str) -> i64 {
    derived_hours(
        parse_or_zero(amount),
        parse_or_zero(net_percentage),
        parse_or_zero(hour_rate),
    )
}

/// Preview for the amount field of an external order.
///
/// `None` while the amount text is empty; any non-empty text (even "abc")
/// produces a value.
pub fn derived_hours_preview(raw_amount: &str, cfg: &Config) -> Option<i64> {
    if raw_amount.is_empty() {
        return None;
    }

    Some(derived_hours_from_text(
        raw_amount,
        &cfg.net_percentage,
        &cfg.hour_rate,
    ))
}
