use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Commission columns of an establishment row.
///
/// Rates are stored as percentages (`5.5` for 5.5%). Any column may be NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EstablishmentFeeConfig {
    pub commission_rate: Option<Decimal>,
    pub day_parking_commission_rate: Option<Decimal>,
    pub fixed_fee: Option<Decimal>,
}

/// Tourist tax columns of an establishment row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EstablishmentTaxConfig {
    pub tourist_tax_enabled: Option<bool>,
    pub tourist_tax_amount: Option<Decimal>,
}
