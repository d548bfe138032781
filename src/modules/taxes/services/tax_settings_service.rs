use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::modules::establishments::models::PlatformDefaults;
use crate::modules::establishments::repositories::EstablishmentRepository;
use crate::modules::establishments::services::bounded_lookup;
use crate::modules::taxes::models::{TouristTaxBreakdown, TouristTaxSettings};
use crate::modules::taxes::services::TouristTaxCalculator;

/// Resolves tourist tax settings per establishment with fail-open defaults
#[derive(Clone)]
pub struct TaxSettingsService {
    repository: Arc<dyn EstablishmentRepository>,
    defaults: PlatformDefaults,
    lookup_timeout: Duration,
}

impl TaxSettingsService {
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

    pub async fn get_tourist_tax_settings(&self, slug: &str) -> TouristTaxSettings {
        let fallback = self.defaults.tourist_tax;
        let lookup = bounded_lookup(self.lookup_timeout, self.repository.find_tax_config(slug));

        match lookup.await {
            Ok(Some(config)) => {
                debug!(slug = %slug, "Loaded establishment tourist tax configuration");
                TouristTaxSettings {
                    tourist_tax_enabled: config
                        .tourist_tax_enabled
                        .unwrap_or(fallback.tourist_tax_enabled),
                    tourist_tax_amount: config
                        .tourist_tax_amount
                        .unwrap_or(fallback.tourist_tax_amount),
                }
            }
            Ok(None) => {
                warn!(slug = %slug, "Establishment not found, using tourist tax defaults");
                fallback
            }
            Err(e) => {
                warn!(
                    slug = %slug,
                    error = %e,
                    "Tourist tax lookup failed, using tourist tax defaults"
                );
                fallback
            }
        }
    }

    pub async fn calculate_establishment_tourist_tax(
        &self,
        number_of_adults: i32,
        number_of_nights: i32,
        slug: &str,
    ) -> TouristTaxBreakdown {
        let settings = self.get_tourist_tax_settings(slug).await;
        TouristTaxCalculator::calculate_tourist_tax(
            number_of_adults,
            number_of_nights,
            settings.tourist_tax_amount,
            settings.tourist_tax_enabled,
        )
    }
}
