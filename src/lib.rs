pub mod aggregator;
pub mod api;
pub mod error;
pub mod store;

pub use error::RestError;
