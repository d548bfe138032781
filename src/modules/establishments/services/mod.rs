pub mod lookup;

pub use lookup::bounded_lookup;
