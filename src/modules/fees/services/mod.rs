pub mod fee_calculator;
pub mod fee_settings_service;

pub use fee_calculator::FeeCalculator;
pub use fee_settings_service::FeeSettingsService;
