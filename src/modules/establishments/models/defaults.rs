use rust_decimal::Decimal;

use crate::modules::fees::models::FeeSettings;
use crate::modules::taxes::models::TouristTaxSettings;

/// Night-stay commission when an establishment cannot be resolved (5%)
pub const DEFAULT_COMMISSION_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Night-stay fixed fee when an establishment cannot be resolved (CHF 3.00)
pub const DEFAULT_FIXED_FEE: Decimal = Decimal::from_parts(300, 0, 0, false, 2);

/// Day parking commission when an establishment cannot be resolved (5%)
pub const DEFAULT_DAY_PARKING_COMMISSION_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Tourist tax per adult per night when an establishment cannot be resolved
pub const DEFAULT_TOURIST_TAX_AMOUNT: Decimal = Decimal::from_parts(300, 0, 0, false, 2);

pub const DEFAULT_LOOKUP_TIMEOUT_MS: u64 = 2_000;

/// Fallback pricing settings used whenever an establishment lookup
/// finds nothing, fails, or times out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformDefaults {
    pub night_fees: FeeSettings,
    pub day_parking_fees: FeeSettings,
    pub tourist_tax: TouristTaxSettings,
}

impl Default for PlatformDefaults {
    fn default() -> Self {
        Self {
            night_fees: FeeSettings::new(DEFAULT_COMMISSION_RATE, DEFAULT_FIXED_FEE),
            day_parking_fees: FeeSettings::new(DEFAULT_DAY_PARKING_COMMISSION_RATE, Decimal::ZERO),
            tourist_tax: TouristTaxSettings {
                tourist_tax_enabled: true,
                tourist_tax_amount: DEFAULT_TOURIST_TAX_AMOUNT,
            },
        }
    }
}
