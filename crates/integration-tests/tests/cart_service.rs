//! Cart service tests: mutation, exact totals, and failure isolation.

use cartwheel_commerce::CommerceError;
use cartwheel_core::{ItemId, Price};
use cartwheel_integration_tests::{CommerceHarness, modify};

#[tokio::test]
async fn add_item_happy_path() {
    let harness = CommerceHarness::new();
    harness.register("test", "testPassword").await;
    let widget = harness.seed_item("Round Widget", 299);

    let cart = harness
        .carts
        .add_item(&modify("test", widget, 2))
        .await
        .expect("items added");

    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.total(), Price::from_cents(598));
}

#[tokio::test]
async fn remove_item_happy_path() {
    let harness = CommerceHarness::new();
    harness.register("test", "testPassword").await;
    let widget = harness.seed_item("Round Widget", 299);

    harness
        .carts
        .add_item(&modify("test", widget, 5))
        .await
        .expect("items added");
    let cart = harness
        .carts
        .remove_item(&modify("test", widget, 2))
        .await
        .expect("items removed");

    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.total(), Price::from_cents(897));
}

#[tokio::test]
async fn totals_stay_exact_over_many_adds() {
    let harness = CommerceHarness::new();
    harness.register("test", "testPassword").await;
    let widget = harness.seed_item("Round Widget", 299);
    let gadget = harness.seed_item("Square Gadget", 1050);

    harness
        .carts
        .add_item(&modify("test", widget, 3))
        .await
        .expect("added");
    let cart = harness
        .carts
        .add_item(&modify("test", gadget, 2))
        .await
        .expect("added");

    // 3 * 2.99 + 2 * 10.50 == 29.97, exactly.
    assert_eq!(cart.item_count(), 5);
    assert_eq!(cart.total(), Price::from_cents(2997));
}

#[tokio::test]
async fn add_unknown_item_leaves_cart_unchanged() {
    let harness = CommerceHarness::new();
    harness.register("test", "testPassword").await;
    let widget = harness.seed_item("Round Widget", 299);

    harness
        .carts
        .add_item(&modify("test", widget, 2))
        .await
        .expect("added");
    let err = harness
        .carts
        .add_item(&modify("test", ItemId::generate(), 1))
        .await
        .expect_err("unknown item");

    assert!(matches!(err, CommerceError::ItemNotFound(_)));

    let user = harness.accounts.find_by_username("test").await.expect("found");
    assert_eq!(user.cart.item_count(), 2);
    assert_eq!(user.cart.total(), Price::from_cents(598));
}

#[tokio::test]
async fn add_for_unknown_user_is_not_found() {
    let harness = CommerceHarness::new();
    let widget = harness.seed_item("Round Widget", 299);

    let err = harness
        .carts
        .add_item(&modify("ghost", widget, 1))
        .await
        .expect_err("unknown user");
    assert!(matches!(err, CommerceError::UserNotFound(_)));
}

#[tokio::test]
async fn remove_for_unknown_user_is_not_found() {
    let harness = CommerceHarness::new();
    let widget = harness.seed_item("Round Widget", 299);

    let err = harness
        .carts
        .remove_item(&modify("ghost", widget, 1))
        .await
        .expect_err("unknown user");
    assert!(matches!(err, CommerceError::UserNotFound(_)));
}

#[tokio::test]
async fn remove_unknown_item_leaves_cart_unchanged() {
    let harness = CommerceHarness::new();
    harness.register("test", "testPassword").await;
    let widget = harness.seed_item("Round Widget", 299);

    harness
        .carts
        .add_item(&modify("test", widget, 2))
        .await
        .expect("added");
    let err = harness
        .carts
        .remove_item(&modify("test", ItemId::generate(), 1))
        .await
        .expect_err("unknown item");

    assert!(err.is_not_found());

    let user = harness.accounts.find_by_username("test").await.expect("found");
    assert_eq!(user.cart.item_count(), 2);
    assert_eq!(user.cart.total(), Price::from_cents(598));
}

#[tokio::test]
async fn zero_quantity_is_accepted_and_changes_nothing() {
    let harness = CommerceHarness::new();
    harness.register("test", "testPassword").await;
    let widget = harness.seed_item("Round Widget", 299);

    let cart = harness
        .carts
        .add_item(&modify("test", widget, 0))
        .await
        .expect("accepted");

    assert_eq!(cart.item_count(), 0);
    assert_eq!(cart.total(), Price::ZERO);
}
