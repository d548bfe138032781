pub mod tourist_tax;

pub use tourist_tax::{TouristTaxBreakdown, TouristTaxSettings};
