use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Platform fees taken from a gross amount before it is paid out to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub original_amount: Decimal,
    /// Commission rate as a percentage (`5` for 5%)
    pub commission_rate: Decimal,
    pub commission: Decimal,
    pub fixed_fee: Decimal,
    pub total_fees: Decimal,
    /// What the host receives; never negative
    pub net_amount: Decimal,
    /// Effective share of `original_amount` taken as fees, in percent
    pub fee_percentage: Decimal,
}

/// Resolved commission settings for one establishment.
///
/// `commission_rate` is a fraction (`0.05` for 5%). Use
/// [`FeeSettings::commission_percentage`] when handing it to the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSettings {
    pub commission_rate: Decimal,
    pub fixed_fee: Decimal,
}

impl FeeSettings {
    pub fn new(commission_rate: Decimal, fixed_fee: Decimal) -> Self {
        Self {
            commission_rate,
            fixed_fee,
        }
    }

    /// Commission rate as the percentage number the calculator expects
    pub fn commission_percentage(&self) -> Decimal {
        (self.commission_rate * Decimal::ONE_HUNDRED).normalize()
    }
}
