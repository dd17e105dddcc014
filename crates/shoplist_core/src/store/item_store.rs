//! Item store: CRUD, listing and summary over the in-memory collection.
//!
//! # Responsibility
//! - Provide add/find/edit/remove/toggle entry points for the shell.
//! - Produce filtered + sorted listing snapshots and aggregate summaries.
//!
//! # Invariants
//! - `find_index` is the single lookup primitive for name-based mutations.
//! - Failed operations leave the collection untouched.
//! - `list` and `summarize` never mutate stored items or their order.

use crate::model::item::{InputError, Item, ItemEdit};
use crate::store::collate::collate;
use log::{debug, info};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by store use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No item has the requested name.
    NotFound(String),
    /// Supplied field values were rejected.
    InvalidInput(InputError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "item not found: {name}"),
            Self::InvalidInput(err) => write!(f, "invalid input: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::InvalidInput(err) => Some(err),
        }
    }
}

impl From<InputError> for StoreError {
    fn from(value: InputError) -> Self {
        Self::InvalidInput(value)
    }
}

/// Attribute used to order a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Name,
    Category,
    Quantity,
}

impl FromStr for SortKey {
    type Err = String;

    /// Accepts English and Portuguese key names, case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "name" | "nome" => Ok(Self::Name),
            "category" | "categoria" => Ok(Self::Category),
            "quantity" | "quantidade" => Ok(Self::Quantity),
            other => Err(format!(
                "unsupported sort key `{other}`; expected name|category|quantity"
            )),
        }
    }
}

/// Listing options. Filters compose with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub sort_key: SortKey,
    /// Keep only items whose category equals this value exactly.
    pub category: Option<String>,
    /// Keep only items whose purchased flag equals this value.
    pub purchased: Option<bool>,
}

/// Item count for one category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Aggregate view of the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_count: usize,
    pub purchased_count: usize,
    pub unpurchased_count: usize,
    /// Categories in first-encountered order.
    pub counts_by_category: Vec<CategoryCount>,
}

/// Ordered in-memory collection of shopping list items.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Appends `item` to the end of the collection.
    ///
    /// Duplicate names are allowed; later lookups keep resolving to the
    /// earlier entry.
    pub fn add(&mut self, item: Item) -> &Item {
        self.items.push(item);
        info!(
            "event=item_add module=store status=ok len={}",
            self.items.len()
        );
        &self.items[self.items.len() - 1]
    }

    /// Returns the position of the first item named exactly `name`.
    ///
    /// Comparison is case-sensitive and does not trim.
    pub fn find_index(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.find_index(name).map(|index| &self.items[index])
    }

    /// Applies every supplied field of `edit` to the first item named `name`.
    ///
    /// # Errors
    /// - `InvalidInput` when the edit sets name or category to an empty value.
    /// - `NotFound` when no item matches.
    ///
    /// Either all supplied fields are written or none are.
    pub fn edit(&mut self, name: &str, edit: &ItemEdit) -> StoreResult<&Item> {
        edit.validate()?;
        let index = self.require_index(name, "edit")?;

        let item = &mut self.items[index];
        if let Some(new_name) = &edit.name {
            item.name = new_name.clone();
        }
        if let Some(quantity) = edit.quantity {
            item.quantity = quantity;
        }
        if let Some(category) = &edit.category {
            item.category = category.clone();
        }
        info!("event=item_edit module=store status=ok index={index}");
        Ok(&self.items[index])
    }

    /// Removes the first item named `name`, shifting later items left.
    pub fn remove(&mut self, name: &str) -> StoreResult<Item> {
        let index = self.require_index(name, "remove")?;
        let removed = self.items.remove(index);
        info!(
            "event=item_remove module=store status=ok index={index} len={}",
            self.items.len()
        );
        Ok(removed)
    }

    /// Flips the purchased flag of the first item named `name`.
    pub fn toggle_purchased(&mut self, name: &str) -> StoreResult<&Item> {
        let index = self.require_index(name, "toggle")?;
        let item = &mut self.items[index];
        item.purchased = !item.purchased;
        info!(
            "event=item_toggle module=store status=ok index={index} purchased={}",
            item.purchased
        );
        Ok(&self.items[index])
    }

    /// Returns a filtered, sorted copy of the collection.
    ///
    /// The sort is stable: items comparing equal on the sort key keep their
    /// insertion order.
    pub fn list(&self, query: &ListQuery) -> Vec<Item> {
        let mut listed: Vec<Item> = self
            .items
            .iter()
            .filter(|item| {
                query
                    .category
                    .as_deref()
                    .map_or(true, |category| item.category == category)
            })
            .filter(|item| query.purchased.map_or(true, |flag| item.purchased == flag))
            .cloned()
            .collect();

        match query.sort_key {
            SortKey::Name => listed.sort_by(|a, b| collate(&a.name, &b.name)),
            SortKey::Category => listed.sort_by(|a, b| collate(&a.category, &b.category)),
            SortKey::Quantity => listed.sort_by_key(|item| item.quantity),
        }

        debug!(
            "event=item_list module=store status=ok sort={:?} filtered={} total={}",
            query.sort_key,
            listed.len(),
            self.items.len()
        );
        listed
    }

    /// Counts items overall, by purchased state and by category.
    pub fn summarize(&self) -> Summary {
        let mut summary = Summary {
            total_count: self.items.len(),
            ..Summary::default()
        };

        for item in &self.items {
            match summary
                .counts_by_category
                .iter_mut()
                .find(|entry| entry.category == item.category)
            {
                Some(entry) => entry.count += 1,
                None => summary.counts_by_category.push(CategoryCount {
                    category: item.category.clone(),
                    count: 1,
                }),
            }

            if item.purchased {
                summary.purchased_count += 1;
            } else {
                summary.unpurchased_count += 1;
            }
        }

        summary
    }

    fn require_index(&self, name: &str, operation: &str) -> StoreResult<usize> {
        self.find_index(name).ok_or_else(|| {
            info!("event=item_{operation} module=store status=not_found");
            StoreError::NotFound(name.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ItemStore, SortKey, StoreError};
    use crate::model::item::{InputError, Item, ItemEdit};

    #[test]
    fn sort_key_parses_both_locales() {
        assert_eq!("Quantity".parse::<SortKey>(), Ok(SortKey::Quantity));
        assert_eq!(" categoria ".parse::<SortKey>(), Ok(SortKey::Category));
        assert_eq!("nome".parse::<SortKey>(), Ok(SortKey::Name));
        assert!("price".parse::<SortKey>().is_err());
    }

    #[test]
    fn edit_with_empty_name_is_rejected_before_lookup() {
        let mut store = ItemStore::new();
        let edit = ItemEdit {
            name: Some(String::new()),
            quantity: Some(9),
            ..ItemEdit::default()
        };

        let err = store.edit("Absent", &edit).unwrap_err();
        assert_eq!(err, StoreError::InvalidInput(InputError::EmptyField("name")));
    }

    #[test]
    fn error_display_names_the_item() {
        let err = StoreError::NotFound("Eggs".to_string());
        assert_eq!(err.to_string(), "item not found: Eggs");
    }

    #[test]
    fn add_returns_the_stored_item() {
        let mut store = ItemStore::new();
        let added = store.add(Item::new("Tea", 1, "Drinks")).clone();
        assert_eq!(added, store.items()[0]);
    }
}
