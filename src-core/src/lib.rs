pub mod db;

pub mod audit;
pub mod goods;
pub mod listings;

pub mod errors;
pub mod schema;

pub use errors::{Error, Result};
