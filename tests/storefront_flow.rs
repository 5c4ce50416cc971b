//! End-to-end wiring tests: UI events in, model events and view calls out.
//!
//! Everything runs through the real application context (bus, models,
//! presenters) with recording views and a wiremock backend standing in
//! for the DOM and the server.

mod common;

use common::{harness, offline_harness, product, seed_catalog};
use larek::store::{CheckoutField, EventKind, PaymentMethod, ShopEvent};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn kinds(events: &[ShopEvent]) -> Vec<EventKind> {
    events.iter().map(|e| e.kind()).collect()
}

#[tokio::test]
async fn adding_same_product_twice_should_keep_one_entry() {
    let h = offline_harness();
    seed_catalog(&h, vec![product("a", Some(100))]);

    h.app
        .handle_event(ShopEvent::ProductSelected {
            id: "a".to_string(),
        })
        .await;
    h.app.handle_event(ShopEvent::CartAddRequested).await;
    h.app.handle_event(ShopEvent::CartAddRequested).await;

    let cart = h.app.cart_model();
    assert_eq!(cart.borrow().item_count(), 1);
    assert_eq!(cart.borrow().total(), 100);
    // The header counter saw exactly one update.
    assert_eq!(h.views.borrow().cart_counters, vec![1]);
}

#[tokio::test]
async fn cart_change_should_update_counter_and_cart_view_independently() {
    let h = offline_harness();
    seed_catalog(&h, vec![product("a", Some(100)), product("b", Some(50))]);

    for id in ["a", "b"] {
        h.app
            .handle_event(ShopEvent::ProductSelected { id: id.to_string() })
            .await;
        h.app.handle_event(ShopEvent::CartAddRequested).await;
    }

    let views = h.views.borrow();
    assert_eq!(views.cart_counters, vec![1, 2]);
    assert_eq!(
        views.rendered_carts.last().unwrap(),
        &(vec!["a".to_string(), "b".to_string()], 150)
    );
}

#[tokio::test]
async fn priceless_product_should_not_enter_the_cart() {
    let h = offline_harness();
    seed_catalog(&h, vec![product("free", None)]);

    h.app
        .handle_event(ShopEvent::ProductSelected {
            id: "free".to_string(),
        })
        .await;
    h.app.handle_event(ShopEvent::CartAddRequested).await;

    assert_eq!(h.app.cart_model().borrow().item_count(), 0);
    assert!(h.views.borrow().cart_counters.is_empty());
}

#[tokio::test]
async fn preview_should_reflect_cart_membership() {
    let h = offline_harness();
    seed_catalog(&h, vec![product("a", Some(100))]);

    h.app
        .handle_event(ShopEvent::ProductSelected {
            id: "a".to_string(),
        })
        .await;
    h.app.handle_event(ShopEvent::CartAddRequested).await;
    h.app
        .handle_event(ShopEvent::ProductSelected {
            id: "a".to_string(),
        })
        .await;

    let previews = &h.views.borrow().rendered_previews;
    assert_eq!(previews[0], ("a".to_string(), false));
    assert_eq!(previews[1], ("a".to_string(), true));
}

#[tokio::test]
async fn removing_absent_product_should_change_nothing() {
    let h = offline_harness();
    seed_catalog(&h, vec![product("a", Some(100))]);

    h.app
        .handle_event(ShopEvent::ProductSelected {
            id: "a".to_string(),
        })
        .await;
    h.app.handle_event(ShopEvent::CartAddRequested).await;
    let events_before = h.events.borrow().len();

    h.app
        .handle_event(ShopEvent::CartRemoveRequested {
            id: "missing".to_string(),
        })
        .await;

    assert_eq!(h.app.cart_model().borrow().item_count(), 1);
    // Only the request itself crossed the bus; no cart-changed followed.
    assert_eq!(
        kinds(&h.events.borrow()[events_before..]),
        vec![EventKind::CartRemoveRequested]
    );
}

#[tokio::test]
async fn checkout_start_should_snapshot_cart_and_open_payment_step() {
    let h = offline_harness();
    seed_catalog(&h, vec![product("a", Some(100)), product("b", Some(50))]);

    for id in ["a", "b"] {
        h.app
            .handle_event(ShopEvent::ProductSelected { id: id.to_string() })
            .await;
        h.app.handle_event(ShopEvent::CartAddRequested).await;
    }
    h.app.handle_event(ShopEvent::CheckoutStarted).await;

    let checkout = h.app.checkout_model();
    assert_eq!(
        checkout.borrow().items(),
        &["a".to_string(), "b".to_string()]
    );
    assert_eq!(h.payment_form.borrow().shown, 1);
    assert_eq!(h.contacts_form.borrow().shown, 0);
}

#[tokio::test]
async fn short_address_should_fail_validation_for_address_only() {
    let h = offline_harness();

    h.app.handle_event(ShopEvent::CheckoutStarted).await;
    h.app
        .handle_event(ShopEvent::CheckoutFieldChanged {
            field: CheckoutField::Address,
            value: "ул".to_string(),
        })
        .await;

    let form = h.payment_form.borrow();
    let errors = form.last_errors().unwrap();
    assert!(errors.address.is_some());
    assert!(errors.payment.is_none());
    assert_eq!(form.validity.last(), Some(&false));
}

#[tokio::test]
async fn valid_payment_step_should_enable_the_form() {
    let h = offline_harness();

    h.app.handle_event(ShopEvent::CheckoutStarted).await;
    h.app
        .handle_event(ShopEvent::PaymentSelected {
            method: PaymentMethod::Card,
        })
        .await;
    h.app
        .handle_event(ShopEvent::CheckoutFieldChanged {
            field: CheckoutField::Address,
            value: "ул. Пушкина, дом 1".to_string(),
        })
        .await;

    let form = h.payment_form.borrow();
    assert_eq!(form.validity.last(), Some(&true));
    assert!(form.last_errors().unwrap().is_empty());
    assert!(kinds(&h.events.borrow()).contains(&EventKind::PaymentStepValid));
}

#[tokio::test]
async fn bad_email_with_normalizable_phone_should_report_email_only() {
    let h = offline_harness();

    h.app.handle_event(ShopEvent::CheckoutStarted).await;
    h.app
        .handle_event(ShopEvent::CheckoutFieldChanged {
            field: CheckoutField::Email,
            value: "bad".to_string(),
        })
        .await;
    h.app
        .handle_event(ShopEvent::CheckoutFieldChanged {
            field: CheckoutField::Phone,
            value: "8123456789".to_string(),
        })
        .await;

    let checkout = h.app.checkout_model();
    assert_eq!(checkout.borrow().phone(), "+7123456789");

    let form = h.contacts_form.borrow();
    let errors = form.last_errors().unwrap();
    assert!(errors.email.is_some());
    assert!(errors.phone.is_none());
}

#[tokio::test]
async fn submit_with_failing_contacts_should_not_call_the_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server.uri());
    seed_catalog(&h, vec![product("a", Some(100))]);

    h.app
        .handle_event(ShopEvent::ProductSelected {
            id: "a".to_string(),
        })
        .await;
    h.app.handle_event(ShopEvent::CartAddRequested).await;
    h.app.handle_event(ShopEvent::CheckoutStarted).await;
    h.app
        .handle_event(ShopEvent::CheckoutFieldChanged {
            field: CheckoutField::Email,
            value: "bad".to_string(),
        })
        .await;

    h.app.handle_event(ShopEvent::SubmitRequested).await;

    // Validation failed again at the gate; nothing was reset.
    assert_eq!(h.app.cart_model().borrow().item_count(), 1);
    let event_kinds = kinds(&h.events.borrow());
    assert!(!event_kinds.contains(&EventKind::OrderCompleted));
    assert!(!event_kinds.contains(&EventKind::OrderFailed));
}

#[tokio::test]
async fn successful_submission_should_clear_cart_and_reset_checkout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "order-1",
            "total": 150
        })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server.uri());
    seed_catalog(&h, vec![product("a", Some(100)), product("b", Some(50))]);

    for id in ["a", "b"] {
        h.app
            .handle_event(ShopEvent::ProductSelected { id: id.to_string() })
            .await;
        h.app.handle_event(ShopEvent::CartAddRequested).await;
    }
    h.app.handle_event(ShopEvent::CheckoutStarted).await;
    h.app
        .handle_event(ShopEvent::PaymentSelected {
            method: PaymentMethod::Card,
        })
        .await;
    h.app
        .handle_event(ShopEvent::CheckoutFieldChanged {
            field: CheckoutField::Address,
            value: "ул. Пушкина, дом 1".to_string(),
        })
        .await;
    h.app.handle_event(ShopEvent::ContactsStepRequested).await;
    h.app
        .handle_event(ShopEvent::CheckoutFieldChanged {
            field: CheckoutField::Email,
            value: "user@example.com".to_string(),
        })
        .await;
    h.app
        .handle_event(ShopEvent::CheckoutFieldChanged {
            field: CheckoutField::Phone,
            value: "89991234567".to_string(),
        })
        .await;

    h.app.handle_event(ShopEvent::SubmitRequested).await;

    // Cart emptied, checkout back to defaults.
    assert_eq!(h.app.cart_model().borrow().item_count(), 0);
    let checkout = h.app.checkout_model();
    assert_eq!(checkout.borrow().payment(), None);
    assert_eq!(checkout.borrow().address(), "");
    assert_eq!(checkout.borrow().email(), "");
    assert_eq!(checkout.borrow().phone(), "");
    assert_eq!(checkout.borrow().total(), 0);

    // The success banner showed the charged total and the counter hit zero.
    assert_eq!(h.views.borrow().success_totals, vec![150]);
    assert_eq!(h.views.borrow().last_cart_counter(), Some(0));
    assert!(kinds(&h.events.borrow()).contains(&EventKind::OrderCompleted));
}

#[tokio::test]
async fn rejected_submission_should_leave_state_for_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"error": "out of stock"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server.uri());
    seed_catalog(&h, vec![product("a", Some(100))]);

    h.app
        .handle_event(ShopEvent::ProductSelected {
            id: "a".to_string(),
        })
        .await;
    h.app.handle_event(ShopEvent::CartAddRequested).await;
    h.app.handle_event(ShopEvent::CheckoutStarted).await;
    h.app
        .handle_event(ShopEvent::PaymentSelected {
            method: PaymentMethod::Cash,
        })
        .await;
    h.app
        .handle_event(ShopEvent::CheckoutFieldChanged {
            field: CheckoutField::Address,
            value: "ул. Пушкина, дом 1".to_string(),
        })
        .await;
    h.app.handle_event(ShopEvent::ContactsStepRequested).await;
    h.app
        .handle_event(ShopEvent::CheckoutFieldChanged {
            field: CheckoutField::Email,
            value: "user@example.com".to_string(),
        })
        .await;
    h.app
        .handle_event(ShopEvent::CheckoutFieldChanged {
            field: CheckoutField::Phone,
            value: "+79991234567".to_string(),
        })
        .await;

    h.app.handle_event(ShopEvent::SubmitRequested).await;

    // No reset: the user may retry as-is.
    assert_eq!(h.app.cart_model().borrow().item_count(), 1);
    let checkout = h.app.checkout_model();
    assert_eq!(checkout.borrow().email(), "user@example.com");
    assert_eq!(checkout.borrow().payment(), Some(PaymentMethod::Cash));
    assert!(!checkout.borrow().is_submitting());

    let failure = h
        .events
        .borrow()
        .iter()
        .find_map(|e| match e {
            ShopEvent::OrderFailed { message } => Some(message.clone()),
            _ => None,
        })
        .expect("OrderFailed should have fired");
    assert_eq!(failure, "out of stock");
    assert!(!kinds(&h.events.borrow()).contains(&EventKind::OrderCompleted));
    assert!(h.views.borrow().success_totals.is_empty());
}

#[tokio::test]
async fn submit_while_in_flight_should_be_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server.uri());
    h.app
        .checkout_model()
        .borrow_mut()
        .set_submitting(true);

    h.app.handle_event(ShopEvent::SubmitRequested).await;

    // The gate swallowed the duplicate click before any validation ran.
    assert!(h.events.borrow().iter().all(|e| e.kind() != EventKind::ContactsValidationFailed));
}
