pub mod booking_total;

pub use booking_total::{
    BookingKind, BookingQuoteRequest, CompleteBookingTotal, PricingOptionSelection,
};
