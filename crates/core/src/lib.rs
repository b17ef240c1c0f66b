//! Domain building blocks for pagekeep: shared types, the domain error
//! taxonomy, and slug derivation/validation.
//!
//! This crate performs no I/O so it can be used by the storage layer, the
//! HTTP layer and tests alike.

pub mod error;
pub mod slug;
pub mod types;
