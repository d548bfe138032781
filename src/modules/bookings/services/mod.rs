pub mod booking_calculator;

pub use booking_calculator::BookingCalculator;
