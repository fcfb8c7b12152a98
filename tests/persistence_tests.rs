mod common;

use std::fs;

use common::{draft, json_tracker, temp_base};
use expense_tracker::{
    core::services::ServiceError,
    domain::{category::Category, transaction::TransactionPatch},
    storage::{read_json, JsonStorage, StorageBackend, BALANCE_KEY, EXPENSES_KEY, TOTAL_BALANCE_KEY},
};

#[test]
fn first_load_seeds_total_balance() {
    let base = temp_base();
    let tracker = json_tracker(&base);
    assert_eq!(tracker.total_balance(), 5000.0);

    let stored = fs::read_to_string(base.join("store").join("totalBalance.json")).unwrap();
    assert_eq!(stored.trim(), "5000.0");
    assert!(!base.join("store").join("balanceAmount.json").exists());
}

#[test]
fn state_survives_a_reload() {
    let base = temp_base();
    let id = {
        let mut tracker = json_tracker(&base);
        tracker.add_income("1000").unwrap();
        tracker
            .add_expense(draft("Groceries", 800.0, Category::Grocery, 12))
            .unwrap()
    };

    let tracker = json_tracker(&base);
    assert_eq!(tracker.balance(), 5200.0);
    assert_eq!(tracker.total_balance(), 6000.0);
    assert_eq!(tracker.transactions().len(), 1);
    assert_eq!(tracker.transactions()[0].id, id);
    assert_eq!(tracker.transactions()[0].category, Category::Grocery);
}

#[test]
fn every_mutation_rewrites_the_expense_list() {
    let base = temp_base();
    let mut tracker = json_tracker(&base);
    let id = tracker
        .add_expense(draft("Cinema", 300.0, Category::Entertainment, 3))
        .unwrap();
    tracker
        .edit(
            &id,
            TransactionPatch {
                title: Some("Concert".into()),
                ..TransactionPatch::default()
            },
        )
        .unwrap();

    let storage = JsonStorage::new(Some(base.clone())).unwrap();
    let raw = storage.get(EXPENSES_KEY).unwrap().unwrap();
    assert!(raw.contains("\"Concert\""));
    assert!(raw.contains("\"Entertainment\""));
    assert_eq!(read_json::<f64>(&storage, BALANCE_KEY).unwrap(), Some(4700.0));

    tracker.delete(&id).unwrap();
    let storage = JsonStorage::new(Some(base)).unwrap();
    assert_eq!(storage.get(EXPENSES_KEY).unwrap().as_deref(), Some("[]"));
    assert_eq!(read_json::<f64>(&storage, BALANCE_KEY).unwrap(), Some(5000.0));
}

#[test]
fn stored_string_amounts_and_unknown_categories_load() {
    let base = temp_base();
    let mut storage = JsonStorage::new(Some(base.clone())).unwrap();
    storage
        .set(
            EXPENSES_KEY,
            r#"[
                {"id":"6f1c2d8e-3b4a-4c5d-9e6f-7a8b9c0d1e2f","title":"Bus","amount":"120.5","category":"Travel","date":"2024-01-05"},
                {"id":"0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d","title":"Gift","amount":"n/a","category":"Gifts","date":"2024-01-06"}
            ]"#,
        )
        .unwrap();
    storage.set(TOTAL_BALANCE_KEY, "5000").unwrap();

    let tracker = json_tracker(&base);
    assert_eq!(tracker.transactions().len(), 2);
    assert_eq!(tracker.total_expenses(), 120.5);

    let totals = tracker.category_totals();
    assert_eq!(totals.get(&Category::Travel), Some(120.5));
    assert_eq!(totals.get(&Category::Unrecognized("Gifts".into())), Some(0.0));
}

#[test]
fn records_with_non_uuid_ids_load_and_can_be_edited() {
    let base = temp_base();
    let mut storage = JsonStorage::new(Some(base.clone())).unwrap();
    storage
        .set(
            EXPENSES_KEY,
            r#"[{"id":"1700000000000","title":"Tea","amount":30,"category":"Food","date":"2024-01-07"}]"#,
        )
        .unwrap();

    let mut tracker = json_tracker(&base);
    assert_eq!(tracker.transactions()[0].id.as_str(), "1700000000000");

    let id = tracker.resolve_id("1700000000000").unwrap();
    tracker
        .edit(
            &id,
            TransactionPatch {
                amount: Some(45.0),
                ..TransactionPatch::default()
            },
        )
        .unwrap();

    let reloaded = json_tracker(&base);
    assert_eq!(reloaded.transactions()[0].id.as_str(), "1700000000000");
    assert_eq!(reloaded.total_expenses(), 45.0);
}

#[test]
fn non_finite_edit_is_rejected_and_store_still_reloads() {
    let base = temp_base();
    let mut tracker = json_tracker(&base);
    let id = tracker
        .add_expense(draft("Snacks", 60.0, Category::Food, 8))
        .unwrap();
    let err = tracker
        .edit(
            &id,
            TransactionPatch {
                amount: Some(f64::NAN),
                ..TransactionPatch::default()
            },
        )
        .expect_err("NaN amount");
    assert!(matches!(err, ServiceError::Validation(_)));

    let reloaded = json_tracker(&base);
    assert_eq!(reloaded.transactions().len(), 1);
    assert_eq!(reloaded.total_expenses(), 60.0);
}

#[test]
fn empty_expense_value_reads_as_no_transactions() {
    let base = temp_base();
    let mut storage = JsonStorage::new(Some(base.clone())).unwrap();
    storage.set(EXPENSES_KEY, "").unwrap();

    let tracker = json_tracker(&base);
    assert!(tracker.transactions().is_empty());
    assert_eq!(tracker.page().total_pages, 1);
}

#[test]
fn rejected_expense_leaves_files_untouched() {
    let base = temp_base();
    let mut tracker = json_tracker(&base);
    let err = tracker
        .add_expense(draft("Sofa", 9000.0, Category::Shopping, 20))
        .expect_err("insufficient");
    assert!(matches!(err, ServiceError::InsufficientFunds { .. }));
    assert!(!base.join("store").join("expenses.json").exists());
}
