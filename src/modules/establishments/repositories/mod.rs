pub mod establishment_repository;

pub use establishment_repository::{EstablishmentRepository, MySqlEstablishmentRepository};
