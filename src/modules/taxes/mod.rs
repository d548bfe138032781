pub mod models;
pub mod services;

pub use models::{TouristTaxBreakdown, TouristTaxSettings};
pub use services::{TaxSettingsService, TouristTaxCalculator};
