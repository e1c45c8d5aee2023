mod common;
use common::{count_orders, load_orders, setup_test_db};

use chrono::NaiveDate;
use workhours::db::OrderStore;
use workhours::errors::AppError;
use workhours::models::order::OrderDraft;
use workhours::models::order_kind::OrderKind;

fn external_draft(customer: &str, order: &str, amount: &str) -> OrderDraft {
    let date = NaiveDate::from_ymd_opt(2025, 3, 29).unwrap();
    let mut draft = OrderDraft::new(date, OrderKind::External);
    draft.customer = customer.to_string();
    draft.customer_order = order.to_string();
    draft.customer_amount = amount.to_string();
    draft
}

fn orders_table_count(db_path: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='orders'",
        [],
        |row| row.get(0),
    )
    .expect("count tables")
}

#[test]
fn test_save_on_fresh_store_creates_one_row() {
    let db_path = setup_test_db("store_fresh");
    let store = OrderStore::new(&db_path);

    store.ensure_schema().expect("ensure schema");
    let id = store
        .save(&external_draft("john smith", "ab-12", "1000"))
        .expect("save order");

    assert_eq!(count_orders(&db_path), 1);

    let rows = load_orders(&db_path);
    assert_eq!(rows[0].id, id);
    assert_eq!(rows[0].date, "2025-03-29");
    assert_eq!(rows[0].customer, "John Smith");
    assert_eq!(rows[0].is_external, 1);
    assert_eq!(rows[0].customer_order, "AB-12");
    assert_eq!(rows[0].customer_amount, 1000.0);
    assert_eq!(rows[0].hours_booked, 0.0);
}

#[test]
fn test_two_saves_get_distinct_increasing_ids() {
    let db_path = setup_test_db("store_two_saves");
    let store = OrderStore::new(&db_path);
    store.ensure_schema().expect("ensure schema");

    let draft = external_draft("acme", "x-1", "500");
    let first = store.save(&draft).expect("first save");
    let second = store.save(&draft).expect("second save");

    assert!(second > first, "ids must increase: {first} then {second}");
    assert_eq!(count_orders(&db_path), 2);

    let ids: Vec<i64> = load_orders(&db_path).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn test_unparsable_numbers_are_stored_as_zero() {
    let db_path = setup_test_db("store_unparsable");
    let store = OrderStore::new(&db_path);
    store.ensure_schema().expect("ensure schema");

    let mut draft = external_draft("acme", "", "abc");
    draft.hours_booked = "eight".to_string();
    store.save(&draft).expect("save order");

    let rows = load_orders(&db_path);
    assert_eq!(rows[0].customer_amount, 0.0);
    assert_eq!(rows[0].hours_booked, 0.0);
}

#[test]
fn test_internal_order_row() {
    let db_path = setup_test_db("store_internal");
    let store = OrderStore::new(&db_path);
    store.ensure_schema().expect("ensure schema");

    let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
    let mut draft = OrderDraft::new(date, OrderKind::Internal);
    draft.customer = "in house".to_string();
    draft.customer_order = "should-not-be-kept".to_string();
    draft.spirit_order = "sp-42".to_string();
    draft.description = "Team meeting".to_string();
    draft.hours_booked = "8".to_string();
    store.save(&draft).expect("save order");

    let rows = load_orders(&db_path);
    assert_eq!(rows[0].is_external, 0);
    assert_eq!(rows[0].customer, "In House");
    assert_eq!(rows[0].customer_order, "");
    assert_eq!(rows[0].spirit_order, "SP-42");
    assert_eq!(rows[0].description, "Team meeting");
    assert_eq!(rows[0].hours_booked, 8.0);

    // the caller's draft is not cleared
    assert_eq!(draft.hours_booked, "8");
}

#[test]
fn test_ensure_schema_is_idempotent() {
    let db_path = setup_test_db("store_idempotent");
    let store = OrderStore::new(&db_path);

    store.ensure_schema().expect("first ensure");
    store
        .save(&external_draft("acme", "a-1", "100"))
        .expect("save order");

    let before = count_orders(&db_path);
    store.ensure_schema().expect("second ensure");
    store.ensure_schema().expect("third ensure");

    assert_eq!(count_orders(&db_path), before);
    assert_eq!(orders_table_count(&db_path), 1);
}

#[test]
fn test_save_without_schema_is_an_error() {
    let db_path = setup_test_db("store_no_schema");
    let store = OrderStore::new(&db_path);

    let err = store
        .save(&external_draft("acme", "a-1", "100"))
        .expect_err("insert into missing table must fail");
    assert!(matches!(err, AppError::Db(_)), "unexpected error: {err:?}");
}

#[test]
fn test_unopenable_storage_is_reported() {
    let mut path = std::env::temp_dir();
    path.push("workhours_missing_dir_for_tests");
    std::fs::remove_dir_all(&path).ok();
    path.push("orders.sqlite");

    let store = OrderStore::new(&path);

    let err = store.ensure_schema().expect_err("open must fail");
    assert!(matches!(err, AppError::Db(_)), "unexpected error: {err:?}");

    let err = store
        .save(&external_draft("acme", "a-1", "100"))
        .expect_err("open must fail");
    assert!(matches!(err, AppError::Db(_)), "unexpected error: {err:?}");
}
