// Shared test doubles for the integration tests.
//
// Usage (from tests/integration/*.rs):
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;

#![allow(dead_code)]

pub mod in_memory_repository;

pub use in_memory_repository::{Establishment, InMemoryEstablishmentRepository};
