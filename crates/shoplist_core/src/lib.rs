//! Core domain logic for the shopping list manager.
//! This crate owns item invariants; the CLI crate only collects input and
//! renders results.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::item::{parse_quantity, InputError, Item, ItemDraft, ItemEdit};
pub use store::collate::collate;
pub use store::item_store::{
    CategoryCount, ItemStore, ListQuery, SortKey, StoreError, StoreResult, Summary,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
