pub mod tax_settings_service;
pub mod tourist_tax_calculator;

pub use tax_settings_service::TaxSettingsService;
pub use tourist_tax_calculator::TouristTaxCalculator;
