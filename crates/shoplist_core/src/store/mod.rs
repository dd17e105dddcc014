//! In-memory item collection.
//!
//! # Responsibility
//! - Own the ordered item sequence for the lifetime of a session.
//! - Provide lookup, mutation, listing and summary use-cases.
//!
//! # Invariants
//! - Lookups are linear and resolve to the first match in insertion order.
//! - Listing returns owned snapshots; stored order only changes on remove.

pub mod collate;
pub mod item_store;
