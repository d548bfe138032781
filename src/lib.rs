//! Stay pricing engine
//!
//! Commission, tourist tax and complete booking totals for hotel and parking
//! establishments, with fail-open lookups of per-establishment settings.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::bookings;
pub use modules::establishments;
pub use modules::fees;
pub use modules::taxes;
