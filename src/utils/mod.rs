pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;

pub use formatting::{parse_number, parse_or_zero, title_case};
