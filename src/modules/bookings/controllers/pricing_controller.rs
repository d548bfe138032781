//! HTTP adapter for booking quotes.
//!
//! Owns no pricing rules; it validates the request, delegates to
//! [`BookingCalculator`] and adds display strings for the booking pages.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::core::{format_chf, format_percentage, AppError};
use crate::modules::bookings::models::{BookingQuoteRequest, CompleteBookingTotal};
use crate::modules::bookings::services::BookingCalculator;

/// Display strings for a quote, formatted for fr-CH
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedQuote {
    pub total_amount: String,
    pub tourist_tax: String,
    pub total_fees: String,
    pub net_amount: String,
    pub commission_rate: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub booking: CompleteBookingTotal,
    pub formatted: FormattedQuote,
}

impl From<CompleteBookingTotal> for QuoteResponse {
    fn from(booking: CompleteBookingTotal) -> Self {
        let formatted = FormattedQuote {
            total_amount: format_chf(booking.total_amount),
            tourist_tax: format_chf(booking.tourist_tax.total_tax),
            total_fees: format_chf(booking.fees.total_fees),
            net_amount: format_chf(booking.fees.net_amount),
            commission_rate: format_percentage(
                booking.fees.commission_rate / rust_decimal::Decimal::ONE_HUNDRED,
            ),
        };

        Self { booking, formatted }
    }
}

/// Price a booking
///
/// POST /pricing/quote
pub async fn create_quote(
    calculator: web::Data<BookingCalculator>,
    request: web::Json<BookingQuoteRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    tracing::debug!(
        slug = %request.establishment_slug,
        kind = ?request.kind,
        "Pricing booking quote"
    );

    let booking = calculator.calculate_quote(&request).await;

    Ok(HttpResponse::Ok().json(QuoteResponse::from(booking)))
}

/// Configure pricing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/pricing").route("/quote", web::post().to(create_quote)));
}
