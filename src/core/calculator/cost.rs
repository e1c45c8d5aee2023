use crate::utils::formatting::parse_number;

/// Total = hours * rate, only when both parse and are strictly positive.
pub fn internal_cost(hours_booked: f64, hour_rate: f64) -> Option<f64> {
    if hours_booked > 0.0 && hour_rate > 0.0 {
        Some(hours_booked * hour_rate)
    } else {
        None
    }
}

/// [`internal_cost`] on raw user text. Unparsable text hides the total.
pub fn internal_cost_preview(raw_hours: &str, raw_rate: &str) -> Option<f64> {
    let hours = parse_number(raw_hours)?;
    let rate = parse_number(raw_rate)?;
    internal_cost(hours, rate)
}
