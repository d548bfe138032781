pub mod bookings;
pub mod establishments;
pub mod fees;
pub mod health;
pub mod taxes;
