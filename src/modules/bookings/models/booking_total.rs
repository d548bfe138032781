use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::currency::MONEY_SCALE;
use crate::core::{AppError, Result};
use crate::modules::fees::models::FeeBreakdown;
use crate::modules::taxes::models::TouristTaxBreakdown;

/// Largest room or option price accepted by the quote API (CHF)
pub const MAX_QUOTE_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Largest number of adults or nights accepted by the quote API
pub const MAX_QUOTE_COUNT: i32 = 1_000;

/// Largest quantity of a single pricing option accepted by the quote API
pub const MAX_OPTION_QUANTITY: u32 = 1_000;

/// Full price of a booking.
///
/// `total_amount` is what the guest pays and always equals `subtotal`.
/// Platform fees are deducted from the host payout (`fees.net_amount`),
/// never added to the guest total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteBookingTotal {
    pub room_price: Decimal,
    pub pricing_options_total: Decimal,
    pub tourist_tax: TouristTaxBreakdown,
    pub subtotal: Decimal,
    pub fees: FeeBreakdown,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingKind {
    /// Overnight stay: tourist tax applies, night commission and fixed fee
    #[default]
    Night,
    /// Day parking: no tourist tax, parking commission and no fixed fee
    DayParking,
}

/// One selected pricing option (breakfast, late checkout, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOptionSelection {
    pub price: Decimal,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl PricingOptionSelection {
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Input for pricing a booking before it is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuoteRequest {
    pub establishment_slug: String,
    #[serde(default)]
    pub kind: BookingKind,
    pub room_price: Decimal,
    #[serde(default)]
    pub number_of_adults: i32,
    #[serde(default)]
    pub number_of_nights: i32,
    #[serde(default)]
    pub pricing_options: Vec<PricingOptionSelection>,
}

impl BookingQuoteRequest {
    /// Sum of all selected options
    pub fn pricing_options_total(&self) -> Decimal {
        self.pricing_options
            .iter()
            .map(PricingOptionSelection::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Reject requests the HTTP surface should not price.
    ///
    /// The calculators themselves accept any input; this only guards the API.
    pub fn validate(&self) -> Result<()> {
        if self.establishment_slug.trim().is_empty() {
            return Err(AppError::validation("establishmentSlug is required"));
        }

        validate_amount("roomPrice", self.room_price)?;

        for (name, count) in [
            ("numberOfAdults", self.number_of_adults),
            ("numberOfNights", self.number_of_nights),
        ] {
            if !(0..=MAX_QUOTE_COUNT).contains(&count) {
                return Err(AppError::validation(format!(
                    "{} must be between 0 and {}, got {}",
                    name, MAX_QUOTE_COUNT, count
                )));
            }
        }

        for option in &self.pricing_options {
            validate_amount("pricing option price", option.price)?;
            if option.quantity > MAX_OPTION_QUANTITY {
                return Err(AppError::validation(format!(
                    "pricing option quantity cannot exceed {}",
                    MAX_OPTION_QUANTITY
                )));
            }
        }

        Ok(())
    }
}

/// Amounts must be non-negative, at most [`MAX_QUOTE_AMOUNT`] and have no
/// more than 2 decimal places.
fn validate_amount(name: &str, amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(AppError::validation(format!("{} cannot be negative", name)));
    }

    if amount > MAX_QUOTE_AMOUNT {
        return Err(AppError::validation(format!(
            "{} cannot exceed {}",
            name, MAX_QUOTE_AMOUNT
        )));
    }

    if amount.normalize().scale() > MONEY_SCALE {
        return Err(AppError::validation(format!(
            "{} must have at most {} decimal places",
            name, MONEY_SCALE
        )));
    }

    Ok(())
}
