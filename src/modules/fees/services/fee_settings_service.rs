use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::modules::establishments::models::PlatformDefaults;
use crate::modules::establishments::repositories::EstablishmentRepository;
use crate::modules::establishments::services::bounded_lookup;
use crate::modules::fees::models::{FeeBreakdown, FeeSettings};
use crate::modules::fees::services::FeeCalculator;

/// Resolves commission settings per establishment, falling back to platform
/// defaults whenever the configuration store cannot answer.
#[derive(Clone)]
pub struct FeeSettingsService {
    repository: Arc<dyn EstablishmentRepository>,
    defaults: PlatformDefaults,
    lookup_timeout: Duration,
}

impl FeeSettingsService {
    pub fn new(
        repository: Arc<dyn EstablishmentRepository>,
        defaults: PlatformDefaults,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            defaults,
            lookup_timeout,
        }
    }

    /// Fee settings for night stays.
    ///
    /// The stored commission rate is a percentage and is divided by 100 here.
    pub async fn get_establishment_fees(&self, slug: &str) -> FeeSettings {
        let lookup = bounded_lookup(self.lookup_timeout, self.repository.find_fee_config(slug));

        match lookup.await {
            Ok(Some(config)) => {
                debug!(slug = %slug, "Loaded establishment fee configuration");
                FeeSettings {
                    commission_rate: config
                        .commission_rate
                        .map(|rate| rate / Decimal::ONE_HUNDRED)
                        .unwrap_or(self.defaults.night_fees.commission_rate),
                    fixed_fee: config.fixed_fee.unwrap_or(self.defaults.night_fees.fixed_fee),
                }
            }
            Ok(None) => {
                warn!(slug = %slug, "Establishment not found, using platform fee defaults");
                self.defaults.night_fees
            }
            Err(e) => {
                warn!(
                    slug = %slug,
                    error = %e,
                    "Fee configuration lookup failed, using platform fee defaults"
                );
                self.defaults.night_fees
            }
        }
    }

    /// Fee settings for day parking. Parking never carries a fixed fee.
    pub async fn get_day_parking_fees(&self, slug: &str) -> FeeSettings {
        let lookup = bounded_lookup(self.lookup_timeout, self.repository.find_fee_config(slug));

        let commission_rate = match lookup.await {
            Ok(Some(config)) => {
                debug!(slug = %slug, "Loaded establishment day parking configuration");
                config
                    .day_parking_commission_rate
                    .map(|rate| rate / Decimal::ONE_HUNDRED)
                    .unwrap_or(self.defaults.day_parking_fees.commission_rate)
            }
            Ok(None) => {
                warn!(slug = %slug, "Establishment not found, using day parking defaults");
                self.defaults.day_parking_fees.commission_rate
            }
            Err(e) => {
                warn!(
                    slug = %slug,
                    error = %e,
                    "Day parking lookup failed, using day parking defaults"
                );
                self.defaults.day_parking_fees.commission_rate
            }
        };

        FeeSettings {
            commission_rate,
            fixed_fee: Decimal::ZERO,
        }
    }

    /// Look up the establishment's night settings and calculate fees on `amount`
    pub async fn calculate_establishment_fees(&self, amount: Decimal, slug: &str) -> FeeBreakdown {
        let settings = self.get_establishment_fees(slug).await;
        FeeCalculator::calculate_fees(amount, settings.commission_percentage(), settings.fixed_fee)
    }

    /// Look up the establishment's day parking rate and calculate fees on `amount`
    pub async fn calculate_day_parking_fees(&self, amount: Decimal, slug: &str) -> FeeBreakdown {
        let settings = self.get_day_parking_fees(slug).await;
        FeeCalculator::calculate_fees(amount, settings.commission_percentage(), settings.fixed_fee)
    }
}
