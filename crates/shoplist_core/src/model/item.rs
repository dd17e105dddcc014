//! Shopping list item model.
//!
//! # Responsibility
//! - Define the canonical record stored by `ItemStore`.
//! - Turn raw prompt text into typed items and edits.
//!
//! # Invariants
//! - `name` and `category` of an item built from input are never blank.
//! - `purchased` starts as `false`.
//! - Blank text and absent text are both treated as "not supplied".

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One shopping list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Lookup key. Not enforced unique; lookups resolve to the first match.
    pub name: String,
    pub quantity: u32,
    /// Free-form label used for filtering and the summary breakdown.
    pub category: String,
    pub purchased: bool,
}

impl Item {
    /// Creates a not-yet-purchased item.
    ///
    /// Does not validate; use `ItemDraft::into_item` for prompt input.
    pub fn new(name: impl Into<String>, quantity: u32, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            category: category.into(),
            purchased: false,
        }
    }
}

/// Rejection reason for user-supplied item fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A required field was absent or blank when adding.
    MissingField(&'static str),
    /// An edit supplied an explicitly empty value for a required field.
    EmptyField(&'static str),
    /// Quantity text is not a non-negative integer.
    InvalidQuantity(String),
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
            Self::EmptyField(field) => write!(f, "field `{field}` cannot be empty"),
            Self::InvalidQuantity(value) => {
                write!(f, "quantity must be a non-negative integer, got `{value}`")
            }
        }
    }
}

impl Error for InputError {}

/// Parses quantity text into a non-negative integer.
///
/// Surrounding whitespace is ignored. Anything else that is not a `u32`
/// (signs, decimals, words) is rejected.
pub fn parse_quantity(value: &str) -> Result<u32, InputError> {
    let trimmed = value.trim();
    if trimmed.starts_with('+') {
        return Err(InputError::InvalidQuantity(value.to_string()));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| InputError::InvalidQuantity(value.to_string()))
}

/// Raw add-item input as collected from prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub category: Option<String>,
}

impl ItemDraft {
    /// Validates presence of every field and parses the quantity.
    ///
    /// Fields are checked in prompt order (name, quantity, category), so the
    /// first missing one is reported.
    pub fn into_item(self) -> Result<Item, InputError> {
        let name = supplied(self.name).ok_or(InputError::MissingField("name"))?;
        let quantity = supplied(self.quantity).ok_or(InputError::MissingField("quantity"))?;
        let category = supplied(self.category).ok_or(InputError::MissingField("category"))?;
        let quantity = parse_quantity(&quantity)?;
        Ok(Item::new(name, quantity, category))
    }
}

/// Field overrides applied by `ItemStore::edit`.
///
/// `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemEdit {
    pub name: Option<String>,
    pub quantity: Option<u32>,
    pub category: Option<String>,
}

impl ItemEdit {
    /// Builds an edit from prompt answers, where a blank answer keeps the field.
    pub fn from_input(
        name: Option<String>,
        quantity: Option<String>,
        category: Option<String>,
    ) -> Result<Self, InputError> {
        let quantity = match supplied(quantity) {
            Some(value) => Some(parse_quantity(&value)?),
            None => None,
        };
        Ok(Self {
            name: supplied(name),
            quantity,
            category: supplied(category),
        })
    }

    /// Returns whether applying this edit would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none() && self.category.is_none()
    }

    pub(crate) fn validate(&self) -> Result<(), InputError> {
        if self.name.as_deref().is_some_and(str::is_empty) {
            return Err(InputError::EmptyField("name"));
        }
        if self.category.as_deref().is_some_and(str::is_empty) {
            return Err(InputError::EmptyField("category"));
        }
        Ok(())
    }
}

fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
