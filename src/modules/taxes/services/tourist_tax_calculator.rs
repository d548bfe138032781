use rust_decimal::Decimal;

use crate::core::round2;
use crate::modules::taxes::models::TouristTaxBreakdown;

/// Per-adult, per-night tourist tax calculation
pub struct TouristTaxCalculator;

impl TouristTaxCalculator {
    /// Calculate the tourist tax for a stay.
    ///
    /// Children are never taxed, so the calculation only takes the adult count.
    /// Negative counts or amounts contribute nothing and a disabled tax is
    /// always zero. The product saturates at `Decimal::MAX`.
    pub fn calculate_tourist_tax(
        number_of_adults: i32,
        number_of_nights: i32,
        tax_per_person: Decimal,
        enabled: bool,
    ) -> TouristTaxBreakdown {
        let total_tax = if enabled {
            let adults = Decimal::from(number_of_adults.max(0));
            let nights = Decimal::from(number_of_nights.max(0));
            round2(
                adults
                    .saturating_mul(nights)
                    .saturating_mul(tax_per_person.max(Decimal::ZERO)),
            )
        } else {
            Decimal::ZERO
        };

        TouristTaxBreakdown {
            enabled,
            tax_per_person,
            number_of_adults,
            number_of_nights,
            total_tax,
        }
    }

    /// Same as [`TouristTaxCalculator::calculate_tourist_tax`] with the tax enabled
    pub fn calculate_tourist_tax_enabled(
        number_of_adults: i32,
        number_of_nights: i32,
        tax_per_person: Decimal,
    ) -> TouristTaxBreakdown {
        Self::calculate_tourist_tax(number_of_adults, number_of_nights, tax_per_person, true)
    }
}
