pub mod initialize;
pub mod log;
pub mod pool;
pub mod queries;
pub mod stats;
pub mod store;

pub use store::OrderStore;
