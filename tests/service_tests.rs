mod common;

use common::{draft, memory_tracker};
use expense_tracker::{
    core::{
        pagination::PageWindow,
        services::{ServiceError, SummaryService, CHART_PALETTE},
    },
    domain::{
        category::Category,
        transaction::{TransactionId, TransactionPatch},
    },
};

#[test]
fn expense_within_balance_is_recorded() {
    let mut tracker = memory_tracker();
    tracker
        .add_expense(draft("Lunch", 1000.0, Category::Food, 10))
        .unwrap();

    assert_eq!(tracker.balance(), 4000.0);
    assert_eq!(tracker.transactions().len(), 1);
    assert_eq!(tracker.transactions()[0].title, "Lunch");
}

#[test]
fn expense_above_balance_raises_alert_and_changes_nothing() {
    let mut tracker = memory_tracker();
    let err = tracker
        .add_expense(draft("TV", 6000.0, Category::Shopping, 10))
        .expect_err("expense exceeds balance");

    assert!(matches!(
        err,
        ServiceError::InsufficientFunds { balance, requested } if balance == 5000.0 && requested == 6000.0
    ));
    assert_eq!(tracker.balance(), 5000.0);
    assert!(tracker.transactions().is_empty());
}

#[test]
fn expense_equal_to_balance_empties_it() {
    let mut tracker = memory_tracker();
    tracker
        .add_expense(draft("Rent", 5000.0, Category::Others, 1))
        .unwrap();
    assert_eq!(tracker.balance(), 0.0);
}

#[test]
fn income_raises_both_balances() {
    let mut tracker = memory_tracker();
    assert_eq!(tracker.add_income(" 250.5 ").unwrap(), 5250.5);
    assert_eq!(tracker.total_balance(), 5250.5);

    let err = tracker.add_income("lots").expect_err("not a number");
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(tracker.balance(), 5250.5);
}

#[test]
fn aggregation_follows_first_seen_order_and_sorts_bars() {
    let mut tracker = memory_tracker();
    tracker.add_expense(draft("Snacks", 100.0, Category::Food, 1)).unwrap();
    tracker.add_expense(draft("Train", 200.0, Category::Travel, 2)).unwrap();
    tracker.add_expense(draft("Dinner", 50.0, Category::Food, 3)).unwrap();

    let totals = tracker.category_totals();
    let order: Vec<_> = totals.iter().map(|t| (t.category.clone(), t.total)).collect();
    assert_eq!(order, vec![(Category::Food, 150.0), (Category::Travel, 200.0)]);
    assert_eq!(totals.grand_total(), tracker.total_expenses());

    let bars = tracker.bar_chart();
    assert_eq!(bars[0].category, Category::Travel);
    assert_eq!(bars[0].color, CHART_PALETTE[0]);
    assert_eq!(bars[1].category, Category::Food);

    let pie = tracker.pie_chart();
    assert_eq!(pie[0].category, Category::Food);
    assert_eq!(pie[1].color, CHART_PALETTE[1]);
}

#[test]
fn aggregating_nothing_is_empty() {
    assert!(SummaryService::aggregate(&[]).is_empty());
}

#[test]
fn twelve_items_page_three() {
    let window = PageWindow::compute(12, 5, 3);
    assert_eq!(window.total_pages, 3);
    assert_eq!((window.start, window.end), (10, 12));
    assert_eq!(window.visible_pages, vec![1, 2, 3]);
}

#[test]
fn twenty_items_page_one_shows_first_three_links() {
    let window = PageWindow::compute(20, 5, 1);
    assert_eq!(window.total_pages, 4);
    assert_eq!(window.visible_pages, vec![1, 2, 3]);
}

#[test]
fn edit_amount_reconciles_balance() {
    let mut tracker = memory_tracker();
    let id = tracker
        .add_expense(draft("Taxi", 300.0, Category::Travel, 4))
        .unwrap();
    assert_eq!(tracker.balance(), 4700.0);

    let patch = TransactionPatch {
        amount: Some(500.0),
        ..TransactionPatch::default()
    };
    let records = tracker.edit(&id, patch).unwrap();
    assert_eq!(records.iter().filter(|txn| txn.id == id).count(), 1);
    assert_eq!(records[0].amount.value(), 500.0);
    assert_eq!(records[0].title, "Taxi");
    assert_eq!(tracker.balance(), 4500.0);
}

#[test]
fn editing_unknown_id_is_not_found() {
    let mut tracker = memory_tracker();
    tracker.add_expense(draft("Tea", 20.0, Category::Food, 5)).unwrap();
    let missing = TransactionId::generate();
    let err = tracker
        .edit(
            &missing,
            TransactionPatch {
                title: Some("Coffee".into()),
                ..TransactionPatch::default()
            },
        )
        .expect_err("unknown id");
    assert!(matches!(err, ServiceError::NotFound(ref id) if *id == missing));
    assert_eq!(tracker.transactions()[0].title, "Tea");
}

#[test]
fn delete_removes_record_and_missing_id_is_noop() {
    let mut tracker = memory_tracker();
    let keep = tracker.add_expense(draft("Book", 400.0, Category::Shopping, 6)).unwrap();
    let gone = tracker.add_expense(draft("Pen", 100.0, Category::Shopping, 7)).unwrap();

    tracker.delete(&gone).unwrap();
    assert_eq!(tracker.transactions().len(), 1);
    assert_eq!(tracker.transactions()[0].id, keep);
    assert_eq!(tracker.balance(), 4600.0);

    tracker.delete(&TransactionId::generate()).unwrap();
    assert_eq!(tracker.transactions().len(), 1);
}
