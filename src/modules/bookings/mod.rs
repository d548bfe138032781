pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{BookingKind, BookingQuoteRequest, CompleteBookingTotal, PricingOptionSelection};
pub use services::BookingCalculator;
