pub mod error;
pub mod geometry;
pub mod host;
pub mod math;
pub mod operations;

pub use error::{DraftError, Result};
