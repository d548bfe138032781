use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use tracing::info;

use crate::modules::bookings::models::{BookingKind, BookingQuoteRequest, CompleteBookingTotal};
use crate::modules::establishments::models::PlatformDefaults;
use crate::modules::establishments::repositories::EstablishmentRepository;
use crate::modules::fees::services::FeeSettingsService;
use crate::modules::taxes::services::{TaxSettingsService, TouristTaxCalculator};

/// Composes tourist tax and platform fees into a complete booking total
#[derive(Clone)]
pub struct BookingCalculator {
    fee_settings: FeeSettingsService,
    tax_settings: TaxSettingsService,
}

impl BookingCalculator {
    pub fn new(
        repository: Arc<dyn EstablishmentRepository>,
        defaults: PlatformDefaults,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            fee_settings: FeeSettingsService::new(repository.clone(), defaults, lookup_timeout),
            tax_settings: TaxSettingsService::new(repository, defaults, lookup_timeout),
        }
    }

    /// Price a night stay.
    ///
    /// Tax and fee settings are looked up separately. Fees are computed on
    /// room + options + tourist tax, and the guest total is that subtotal.
    /// The subtotal saturates at `Decimal::MAX`.
    pub async fn calculate_complete_booking(
        &self,
        room_price: Decimal,
        number_of_adults: i32,
        number_of_nights: i32,
        establishment_slug: &str,
        pricing_options_total: Option<Decimal>,
    ) -> CompleteBookingTotal {
        let pricing_options_total = pricing_options_total.unwrap_or(Decimal::ZERO);

        let tourist_tax = self
            .tax_settings
            .calculate_establishment_tourist_tax(
                number_of_adults,
                number_of_nights,
                establishment_slug,
            )
            .await;

        let subtotal = room_price
            .saturating_add(pricing_options_total)
            .saturating_add(tourist_tax.total_tax);

        let fees = self
            .fee_settings
            .calculate_establishment_fees(subtotal, establishment_slug)
            .await;

        info!(
            slug = %establishment_slug,
            subtotal = %subtotal,
            total_fees = %fees.total_fees,
            net_amount = %fees.net_amount,
            "Calculated booking total"
        );

        CompleteBookingTotal {
            room_price,
            pricing_options_total,
            tourist_tax,
            subtotal,
            fees,
            total_amount: subtotal,
        }
    }

    /// Price a day parking booking: no tourist tax, parking commission only
    pub async fn calculate_day_parking_booking(
        &self,
        parking_price: Decimal,
        number_of_adults: i32,
        establishment_slug: &str,
        pricing_options_total: Option<Decimal>,
    ) -> CompleteBookingTotal {
        let pricing_options_total = pricing_options_total.unwrap_or(Decimal::ZERO);
        let tourist_tax =
            TouristTaxCalculator::calculate_tourist_tax(number_of_adults, 0, Decimal::ZERO, false);

        let subtotal = parking_price.saturating_add(pricing_options_total);

        let fees = self
            .fee_settings
            .calculate_day_parking_fees(subtotal, establishment_slug)
            .await;

        info!(
            slug = %establishment_slug,
            subtotal = %subtotal,
            total_fees = %fees.total_fees,
            "Calculated day parking total"
        );

        CompleteBookingTotal {
            room_price: parking_price,
            pricing_options_total,
            tourist_tax,
            subtotal,
            fees,
            total_amount: subtotal,
        }
    }

    /// Price a quote request according to its booking kind
    pub async fn calculate_quote(&self, request: &BookingQuoteRequest) -> CompleteBookingTotal {
        let options_total = Some(request.pricing_options_total());

        match request.kind {
            BookingKind::Night => {
                self.calculate_complete_booking(
                    request.room_price,
                    request.number_of_adults,
                    request.number_of_nights,
                    &request.establishment_slug,
                    options_total,
                )
                .await
            }
            BookingKind::DayParking => {
                self.calculate_day_parking_booking(
                    request.room_price,
                    request.number_of_adults,
                    &request.establishment_slug,
                    options_total,
                )
                .await
            }
        }
    }
}
