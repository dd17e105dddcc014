use serde_json::json;
use shoplist_core::{InputError, Item, ItemDraft, ItemStore, StoreError};

#[test]
fn item_serializes_with_stable_field_names() {
    let item = Item::new("Milk", 2, "Dairy");
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "Milk",
            "quantity": 2,
            "category": "Dairy",
            "purchased": false,
        })
    );

    let decoded: Item = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn summary_serializes_categories_in_first_seen_order() {
    let mut store = ItemStore::new();
    store.add(Item::new("Milk", 2, "Dairy"));
    store.add(Item::new("Bread", 1, "Bakery"));
    store.add(Item::new("Butter", 1, "Dairy"));

    let value = serde_json::to_value(store.summarize()).unwrap();
    assert_eq!(
        value["counts_by_category"],
        json!([
            { "category": "Dairy", "count": 2 },
            { "category": "Bakery", "count": 1 },
        ])
    );
}

#[test]
fn non_numeric_quantity_is_invalid_input() {
    let draft = ItemDraft {
        name: Some("Milk".to_string()),
        quantity: Some("a dozen".to_string()),
        category: Some("Dairy".to_string()),
    };

    let err = StoreError::from(draft.into_item().unwrap_err());
    assert_eq!(
        err,
        StoreError::InvalidInput(InputError::InvalidQuantity("a dozen".to_string()))
    );
    assert!(err.to_string().contains("non-negative integer"));
}
