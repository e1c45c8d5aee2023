pub mod cost;
pub mod hours;

pub use cost::{internal_cost, internal_cost_preview};
pub use hours::{derived_hours, derived_hours_from_text, derived_hours_preview};
