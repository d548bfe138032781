use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tourist tax owed for a stay. Only adults are liable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouristTaxBreakdown {
    pub enabled: bool,
    pub tax_per_person: Decimal,
    pub number_of_adults: i32,
    pub number_of_nights: i32,
    pub total_tax: Decimal,
}

/// Resolved tourist tax settings for one establishment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouristTaxSettings {
    pub tourist_tax_enabled: bool,
    /// Amount per adult per night
    pub tourist_tax_amount: Decimal,
}
