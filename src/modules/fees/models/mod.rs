pub mod fee_breakdown;

pub use fee_breakdown::{FeeBreakdown, FeeSettings};
