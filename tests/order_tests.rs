mod harness;
mod support;

use std::sync::Arc;

use chrono::Duration;
use pharmacy_ledger::application::Storefront;
use pharmacy_ledger::domain::{NewOrder, OrderId, OrderStatus};
use pharmacy_ledger::error::Error;
use pharmacy_ledger::port::Event;
use pharmacy_ledger::testkit::clock::FixedClock;
use pharmacy_ledger::testkit::{config, domain, storefront};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use harness::recording_notifier::RecordingNotifier;
use support::place;

fn shop() -> storefront::TestStorefront {
    storefront::in_memory(FixedClock::on(2025, 6, 10), config::archive()).unwrap()
}

#[test]
fn total_is_recomputed_and_client_total_ignored() {
    let ts = shop();
    let mut checkout = domain::checkout(vec![
        domain::item("p-1", dec!(10), 2),
        domain::item("p-2", dec!(5), 1),
    ]);
    checkout.client_total = Some(dec!(999));

    let order = ts.shop.create_order(checkout).unwrap();

    assert_eq!(order.total_amount, dec!(25));
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.updated_at.is_none());
    let stats = ts.shop.stats().unwrap();
    assert_eq!(stats.daily_sales, dec!(25));
    assert_eq!(stats.monthly_orders, 1);
}

#[test]
fn checkout_json_accepts_client_total_field() {
    let ts = shop();
    let checkout: NewOrder = serde_json::from_str(
        r#"{
            "customerName": "Ali",
            "phone": "01100000000",
            "address": "Giza",
            "items": [{"id": "p-9", "name": "Strepsils", "price": 45.5, "quantity": 2}],
            "totalAmount": 1
        }"#,
    )
    .unwrap();

    let order = ts.shop.create_order(checkout).unwrap();
    assert_eq!(order.total_amount, dec!(91));
}

#[test]
fn invalid_checkout_is_rejected_without_side_effects() {
    let ts = shop();
    let mut checkout = domain::checkout(vec![]);
    checkout.address = "  ".into();

    let err = ts.shop.create_order(checkout).unwrap_err();

    assert!(err.is_validation());
    match err {
        Error::Domain(domain_err) => {
            let fields: Vec<_> = domain_err.fields().iter().map(|f| f.field.clone()).collect();
            assert_eq!(fields, vec!["address", "items"]);
        }
        other => panic!("expected validation error, got {other}"),
    }
    assert!(ts.shop.orders().is_empty());
    assert_eq!(ts.shop.stats().unwrap().daily_orders, 0);
}

#[test]
fn oversized_line_total_is_rejected_without_side_effects() {
    let ts = shop();
    let checkout = domain::checkout(vec![domain::item("p-1", Decimal::MAX / dec!(2), 3)]);

    let err = ts.shop.create_order(checkout).unwrap_err();

    assert!(err.is_validation());
    match err {
        Error::Domain(domain_err) => {
            assert_eq!(domain_err.fields()[0].field, "items[0].price");
        }
        other => panic!("expected validation error, got {other}"),
    }
    assert!(ts.shop.orders().is_empty());
    assert_eq!(ts.shop.stats().unwrap().monthly_orders, 0);
}

#[test]
fn same_day_cancellation_debits_both_periods() {
    let ts = shop();
    let order = place(&ts, dec!(100));
    place(&ts, dec!(40));

    ts.shop
        .update_order_status(&order.id, "cancelled")
        .unwrap();

    let stats = ts.shop.stats().unwrap();
    assert_eq!(stats.daily_sales, dec!(40));
    assert_eq!(stats.daily_orders, 1);
    assert_eq!(stats.monthly_sales, dec!(40));
    assert_eq!(stats.monthly_orders, 1);
}

#[test]
fn cancelling_an_older_order_only_debits_the_month() {
    let ts = storefront::in_memory(FixedClock::on(2025, 6, 9), config::archive()).unwrap();
    let old = place(&ts, dec!(100));
    ts.clock.set_day(2025, 6, 10);
    place(&ts, dec!(40));

    ts.shop
        .set_order_status(&old.id, OrderStatus::Cancelled)
        .unwrap();

    let stats = ts.shop.stats().unwrap();
    assert_eq!(stats.daily_sales, dec!(40));
    assert_eq!(stats.daily_orders, 1);
    assert_eq!(stats.monthly_sales, dec!(40));
    assert_eq!(stats.monthly_orders, 1);
    // Yesterday's archive is untouched.
    assert_eq!(ts.shop.daily_archives()[0].daily_sales, dec!(100));
}

#[test]
fn cancelling_twice_debits_once() {
    let ts = shop();
    let order = place(&ts, dec!(100));
    place(&ts, dec!(60));

    let first = ts
        .shop
        .set_order_status(&order.id, OrderStatus::Cancelled)
        .unwrap();
    ts.clock.advance(Duration::minutes(5));
    let second = ts
        .shop
        .set_order_status(&order.id, OrderStatus::Cancelled)
        .unwrap();

    assert_eq!(first.previous, OrderStatus::Pending);
    assert_eq!(second.previous, OrderStatus::Cancelled);
    assert!(second.order.updated_at > first.order.updated_at);

    let stats = ts.shop.stats().unwrap();
    assert_eq!(stats.monthly_sales, dec!(60));
    assert_eq!(stats.monthly_orders, 1);
}

#[test]
fn status_follows_the_lifecycle() {
    let ts = shop();
    let order = place(&ts, dec!(30));

    for status in ["confirmed", "shipped", "delivered"] {
        ts.shop.update_order_status(&order.id, status).unwrap();
    }
    let delivered = ts.shop.order(&order.id).unwrap();
    assert_eq!(delivered.status, OrderStatus::Delivered);
    assert!(delivered.updated_at.is_some());

    let err = ts
        .shop
        .update_order_status(&order.id, "cancelled")
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Domain(pharmacy_ledger::domain::DomainError::InvalidTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Cancelled,
        })
    ));
    // Delivered orders keep counting.
    assert_eq!(ts.shop.stats().unwrap().daily_sales, dec!(30));
}

#[test]
fn unknown_status_is_a_validation_error() {
    let ts = shop();
    let order = place(&ts, dec!(30));

    let err = ts
        .shop
        .update_order_status(&order.id, "refunded")
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(ts.shop.order(&order.id).unwrap().status, OrderStatus::Pending);
}

#[test]
fn missing_order_is_not_found() {
    let ts = shop();
    let missing = OrderId::new("does-not-exist");

    assert!(ts.shop.order(&missing).unwrap_err().is_not_found());
    assert!(ts
        .shop
        .update_order_status(&missing, "confirmed")
        .unwrap_err()
        .is_not_found());
    assert!(ts.shop.delete_order(&missing).unwrap_err().is_not_found());
}

#[test]
fn orders_are_listed_newest_first() {
    let ts = shop();
    let first = place(&ts, dec!(10));
    ts.clock.advance(Duration::minutes(1));
    let second = place(&ts, dec!(20));
    ts.clock.advance(Duration::minutes(1));
    let third = place(&ts, dec!(30));

    let ids: Vec<_> = ts.shop.orders().into_iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[test]
fn deleting_an_order_leaves_counters_alone() {
    let ts = shop();
    let order = place(&ts, dec!(55));

    let removed = ts.shop.delete_order(&order.id).unwrap();

    assert_eq!(removed.id, order.id);
    assert!(ts.shop.orders().is_empty());
    assert_eq!(ts.shop.stats().unwrap().daily_sales, dec!(55));
}

#[test]
fn order_placed_on_the_first_stays_in_the_new_month() {
    let ts = storefront::in_memory(FixedClock::on(2025, 3, 31), config::archive()).unwrap();
    place(&ts, dec!(100));

    ts.clock.set_day(2025, 4, 1);
    let april = place(&ts, dec!(15));

    assert_eq!(ts.shop.orders(), vec![april]);
    let monthly = ts.shop.monthly_archives();
    assert_eq!(monthly.len(), 1);
    assert_eq!(monthly[0].orders_count, 1);
    assert_eq!(monthly[0].monthly_sales, dec!(100));
    let stats = ts.shop.stats().unwrap();
    assert_eq!(stats.monthly_sales, dec!(15));
    // March 31 sales stay on the daily counters until April 2.
    assert_eq!(stats.daily_sales, dec!(115));
    assert_eq!(stats.daily_orders, 2);
}

#[test]
fn order_creation_notifies_listeners() {
    let recorder = RecordingNotifier::new();
    let ts = storefront::with_notifier(FixedClock::on(2025, 6, 9), recorder.clone())
        .unwrap();

    let order = ts
        .shop
        .create_order(domain::checkout(vec![
            domain::item("p-1", dec!(12.5), 2),
            domain::item("p-2", dec!(3), 1),
        ]))
        .unwrap();

    let events = recorder.events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        Event::OrderCreated(event) => {
            assert_eq!(event.order_id, order.id);
            assert_eq!(event.customer_name, "Mona Adel");
            assert_eq!(event.total, dec!(28));
            assert_eq!(event.item_count, 3);
        }
        other => panic!("unexpected event {other:?}"),
    }

    ts.clock.set_day(2025, 6, 10);
    ts.shop.stats().unwrap();
    assert_eq!(recorder.len(), 2);
    assert!(matches!(
        &recorder.events()[1],
        Event::DailyArchived(event) if event.sales == dec!(28) && !event.manual
    ));
}

#[test]
fn unit_count_of_huge_quantities_does_not_wrap() {
    let recorder = RecordingNotifier::new();
    let ts = storefront::with_notifier(FixedClock::on(2025, 6, 9), recorder.clone())
        .unwrap();

    ts.shop
        .create_order(domain::checkout(vec![
            domain::item("p-1", dec!(0.01), u32::MAX),
            domain::item("p-2", dec!(1), 2),
        ]))
        .unwrap();

    match &recorder.events()[0] {
        Event::OrderCreated(event) => {
            assert_eq!(event.item_count, u64::from(u32::MAX) + 2);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn every_registered_notifier_receives_events() {
    let first = RecordingNotifier::new();
    let second = RecordingNotifier::new();
    let shop = Storefront::builder()
        .in_memory()
        .clock(Arc::new(FixedClock::on(2025, 6, 9)))
        .notifier(first.clone())
        .notifier(second.clone())
        .build()
        .unwrap();

    shop.create_order(domain::checkout_of(dec!(20))).unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert!(matches!(&second.events()[0], Event::OrderCreated(event) if event.total == dec!(20)));
}

#[test]
fn rejected_order_does_not_notify() {
    let recorder = RecordingNotifier::new();
    let ts = storefront::with_notifier(FixedClock::on(2025, 6, 9), recorder.clone())
        .unwrap();

    let mut checkout = domain::checkout_of(dec!(10));
    checkout.items[0].quantity = 0;
    assert!(ts.shop.create_order(checkout).is_err());

    assert_eq!(recorder.len(), 0);
    assert_eq!(ts.shop.stats().unwrap().daily_sales, Decimal::ZERO);
}
