use crate::core::{AppError, Result};
use crate::modules::establishments::models::PlatformDefaults;
use crate::modules::establishments::models::defaults::{
    DEFAULT_COMMISSION_RATE, DEFAULT_DAY_PARKING_COMMISSION_RATE, DEFAULT_FIXED_FEE,
    DEFAULT_LOOKUP_TIMEOUT_MS, DEFAULT_TOURIST_TAX_AMOUNT,
};
use crate::modules::fees::models::FeeSettings;
use crate::modules::taxes::models::TouristTaxSettings;
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Platform-wide pricing fallbacks and lookup limits.
///
/// Rates are read from the environment as percentages (`5` for 5%), the same
/// convention the establishments table uses, and converted to fractions once
/// in [`PricingConfig::platform_defaults`].
#[derive(Debug, Clone)]
pub struct PricingConfig {
    pub commission_rate_percent: Decimal,
    pub fixed_fee: Decimal,
    pub day_parking_commission_rate_percent: Decimal,
    pub tourist_tax_amount: Decimal,
    pub lookup_timeout_ms: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            commission_rate_percent: DEFAULT_COMMISSION_RATE * Decimal::ONE_HUNDRED,
            fixed_fee: DEFAULT_FIXED_FEE,
            day_parking_commission_rate_percent: DEFAULT_DAY_PARKING_COMMISSION_RATE
                * Decimal::ONE_HUNDRED,
            tourist_tax_amount: DEFAULT_TOURIST_TAX_AMOUNT,
            lookup_timeout_ms: DEFAULT_LOOKUP_TIMEOUT_MS,
        }
    }
}

impl PricingConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            commission_rate_percent: decimal_var(
                "PLATFORM_COMMISSION_RATE",
                defaults.commission_rate_percent,
            )?,
            fixed_fee: decimal_var("PLATFORM_FIXED_FEE", defaults.fixed_fee)?,
            day_parking_commission_rate_percent: decimal_var(
                "DAY_PARKING_COMMISSION_RATE",
                defaults.day_parking_commission_rate_percent,
            )?,
            tourist_tax_amount: decimal_var(
                "DEFAULT_TOURIST_TAX_AMOUNT",
                defaults.tourist_tax_amount,
            )?,
            lookup_timeout_ms: match env::var("CONFIG_LOOKUP_TIMEOUT_MS") {
                Ok(raw) => raw.parse().map_err(|_| {
                    AppError::Configuration("Invalid CONFIG_LOOKUP_TIMEOUT_MS".to_string())
                })?,
                Err(_) => defaults.lookup_timeout_ms,
            },
        })
    }

    pub fn validate(&self) -> Result<()> {
        for (name, rate) in [
            ("PLATFORM_COMMISSION_RATE", self.commission_rate_percent),
            (
                "DAY_PARKING_COMMISSION_RATE",
                self.day_parking_commission_rate_percent,
            ),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
                return Err(AppError::Configuration(format!(
                    "{} must be between 0 and 100, got {}",
                    name, rate
                )));
            }
        }

        if self.fixed_fee < Decimal::ZERO {
            return Err(AppError::Configuration(
                "PLATFORM_FIXED_FEE cannot be negative".to_string(),
            ));
        }

        if self.tourist_tax_amount < Decimal::ZERO {
            return Err(AppError::Configuration(
                "DEFAULT_TOURIST_TAX_AMOUNT cannot be negative".to_string(),
            ));
        }

        if self.lookup_timeout_ms == 0 {
            return Err(AppError::Configuration(
                "CONFIG_LOOKUP_TIMEOUT_MS must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Immutable fallback values handed to the settings services at startup
    pub fn platform_defaults(&self) -> PlatformDefaults {
        PlatformDefaults {
            night_fees: FeeSettings {
                commission_rate: self.commission_rate_percent / Decimal::ONE_HUNDRED,
                fixed_fee: self.fixed_fee,
            },
            day_parking_fees: FeeSettings {
                commission_rate: self.day_parking_commission_rate_percent
                    / Decimal::ONE_HUNDRED,
                fixed_fee: Decimal::ZERO,
            },
            tourist_tax: TouristTaxSettings {
                tourist_tax_enabled: true,
                tourist_tax_amount: self.tourist_tax_amount,
            },
        }
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }
}

fn decimal_var(name: &str, default: Decimal) -> Result<Decimal> {
    match env::var(name) {
        Ok(raw) => Decimal::from_str(raw.trim())
            .map_err(|_| AppError::Configuration(format!("Invalid {}", name))),
        Err(_) => Ok(default),
    }
}
