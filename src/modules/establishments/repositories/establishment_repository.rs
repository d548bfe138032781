use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::establishments::models::{EstablishmentFeeConfig, EstablishmentTaxConfig};

/// Read-only access to per-establishment pricing configuration
#[async_trait]
pub trait EstablishmentRepository: Send + Sync {
    /// Commission columns for the establishment, `None` if the slug is unknown
    async fn find_fee_config(&self, slug: &str) -> Result<Option<EstablishmentFeeConfig>>;

    /// Tourist tax columns for the establishment, `None` if the slug is unknown
    async fn find_tax_config(&self, slug: &str) -> Result<Option<EstablishmentTaxConfig>>;

    /// Check that the store answers at all
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// MySQL-backed establishment configuration
#[derive(Clone)]
pub struct MySqlEstablishmentRepository {
    pool: MySqlPool,
}

impl MySqlEstablishmentRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EstablishmentRepository for MySqlEstablishmentRepository {
    async fn find_fee_config(&self, slug: &str) -> Result<Option<EstablishmentFeeConfig>> {
        let config = sqlx::query_as::<_, EstablishmentFeeConfig>(
            r#"
            SELECT commission_rate, day_parking_commission_rate, fixed_fee
            FROM establishments
            WHERE slug = ?
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(config)
    }

    async fn find_tax_config(&self, slug: &str) -> Result<Option<EstablishmentTaxConfig>> {
        let config = sqlx::query_as::<_, EstablishmentTaxConfig>(
            r#"
            SELECT tourist_tax_enabled, tourist_tax_amount
            FROM establishments
            WHERE slug = ?
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(config)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
