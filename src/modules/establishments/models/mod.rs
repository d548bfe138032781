pub mod defaults;
pub mod establishment_config;

pub use defaults::PlatformDefaults;
pub use establishment_config::{EstablishmentFeeConfig, EstablishmentTaxConfig};
