pub mod currency;
pub mod error;

pub use currency::{format_chf, format_percentage, round2};
pub use error::{AppError, Result};
