//! Shopping list domain model.
//!
//! # Responsibility
//! - Define the item record and the typed shapes of add/edit input.
//!
//! # Invariants
//! - Supplied-vs-omitted fields are expressed with `Option`, never with
//!   sentinel values.

pub mod item;
