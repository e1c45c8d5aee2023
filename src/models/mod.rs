pub mod color_scheme;
pub mod order;
pub mod order_kind;
