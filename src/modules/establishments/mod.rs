pub mod models;
pub mod repositories;
pub mod services;

pub use models::{EstablishmentFeeConfig, EstablishmentTaxConfig, PlatformDefaults};
pub use repositories::{EstablishmentRepository, MySqlEstablishmentRepository};
