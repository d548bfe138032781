pub mod models;
pub mod services;

pub use models::{FeeBreakdown, FeeSettings};
pub use services::{FeeCalculator, FeeSettingsService};
