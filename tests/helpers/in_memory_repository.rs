use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use staypricing::core::{AppError, Result};
use staypricing::establishments::{
    EstablishmentFeeConfig, EstablishmentRepository, EstablishmentTaxConfig,
};
use tokio::sync::RwLock;

/// Establishment row fixture, keyed by slug
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Establishment {
    pub slug: String,
    pub fees: EstablishmentFeeConfig,
    pub tax: EstablishmentTaxConfig,
}

impl Establishment {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            fees: EstablishmentFeeConfig::default(),
            tax: EstablishmentTaxConfig::default(),
        }
    }

    pub fn with_fees(mut self, commission_rate: Decimal, fixed_fee: Decimal) -> Self {
        self.fees.commission_rate = Some(commission_rate);
        self.fees.fixed_fee = Some(fixed_fee);
        self
    }

    pub fn with_day_parking_rate(mut self, rate: Decimal) -> Self {
        self.fees.day_parking_commission_rate = Some(rate);
        self
    }

    pub fn with_tourist_tax(mut self, enabled: bool, amount: Decimal) -> Self {
        self.tax.tourist_tax_enabled = Some(enabled);
        self.tax.tourist_tax_amount = Some(amount);
        self
    }
}

/// HashMap-backed establishment store.
///
/// Can be switched to an unavailable state or given an artificial latency to
/// exercise the fallback paths of the settings services.
#[derive(Default)]
pub struct InMemoryEstablishmentRepository {
    establishments: RwLock<HashMap<String, Establishment>>,
    unavailable: AtomicBool,
    latency_ms: AtomicU64,
}

impl InMemoryEstablishmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_establishments(establishments: impl IntoIterator<Item = Establishment>) -> Self {
        let map = establishments
            .into_iter()
            .map(|e| (e.slug.clone(), e))
            .collect();

        Self {
            establishments: RwLock::new(map),
            ..Self::default()
        }
    }

    pub async fn insert(&self, establishment: Establishment) {
        self.establishments
            .write()
            .await
            .insert(establishment.slug.clone(), establishment);
    }

    /// Make every lookup fail the way an exhausted MySQL pool does
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Delay every lookup by `latency`
    pub fn set_latency(&self, latency: Duration) {
        self.latency_ms
            .store(latency.as_millis() as u64, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    async fn find(&self, slug: &str) -> Result<Option<Establishment>> {
        let latency = self.latency_ms.load(Ordering::SeqCst);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }

        self.check_available()?;
        Ok(self.establishments.read().await.get(slug).cloned())
    }
}

#[async_trait]
impl EstablishmentRepository for InMemoryEstablishmentRepository {
    async fn find_fee_config(&self, slug: &str) -> Result<Option<EstablishmentFeeConfig>> {
        Ok(self.find(slug).await?.map(|e| e.fees))
    }

    async fn find_tax_config(&self, slug: &str) -> Result<Option<EstablishmentTaxConfig>> {
        Ok(self.find(slug).await?.map(|e| e.tax))
    }

    async fn ping(&self) -> Result<()> {
        self.check_available()
    }
}
