//! # Checkout Presenter
//!
//! Wires the two-step checkout: step entry snapshots cart state into the
//! checkout model, field changes feed the validators, validation outcomes
//! drive the form views, and submission talks to the API.
//!
//! Submission is the one asynchronous path. It is gated twice: a
//! "submission in progress" flag swallows duplicate submit clicks while an
//! order is in flight, and contacts validation re-runs synchronously before
//! any network call. The cart is cleared and the form reset only after the
//! server confirms the order.

use std::cell::RefCell;
use std::rc::Rc;

use crate::store::events::{CheckoutStep, EventBus, EventKind, ShopEvent};
use crate::store::models::{CartModel, CheckoutModel};
use crate::store::services::ShopApi;
use crate::store::views::{CheckoutFormView, SharedView, SuccessView};

pub struct CheckoutPresenter {
    bus: Rc<EventBus>,
    checkout: Rc<RefCell<CheckoutModel>>,
    cart: Rc<RefCell<CartModel>>,
    api: Rc<ShopApi>,
}

impl CheckoutPresenter {
    pub fn new(
        bus: Rc<EventBus>,
        checkout: Rc<RefCell<CheckoutModel>>,
        cart: Rc<RefCell<CartModel>>,
        api: Rc<ShopApi>,
        payment_view: SharedView<dyn CheckoutFormView>,
        contacts_view: SharedView<dyn CheckoutFormView>,
        success_view: SharedView<dyn SuccessView>,
    ) -> Self {
        // UI: checkout begins; snapshot the cart ids and open the payment step.
        let checkout_for_start = checkout.clone();
        let cart_for_start = cart.clone();
        let bus_for_start = bus.clone();
        bus.on(
            EventKind::CheckoutStarted,
            Rc::new(move |_| {
                let ids = cart_for_start.borrow().item_ids();
                checkout_for_start.borrow_mut().begin(ids);
                bus_for_start.emit(ShopEvent::CheckoutStepChanged {
                    step: CheckoutStep::Payment,
                });
            }),
        );

        // UI: the payment step's "next"; snapshot the total and open contacts.
        let checkout_for_contacts = checkout.clone();
        let cart_for_contacts = cart.clone();
        let bus_for_contacts = bus.clone();
        bus.on(
            EventKind::ContactsStepRequested,
            Rc::new(move |_| {
                let total = cart_for_contacts.borrow().total();
                checkout_for_contacts.borrow_mut().set_total(total);
                bus_for_contacts.emit(ShopEvent::CheckoutStepChanged {
                    step: CheckoutStep::Contacts,
                });
            }),
        );

        // Model: step changes bring the matching form on screen.
        let payment_for_step = payment_view.clone();
        let contacts_for_step = contacts_view.clone();
        bus.on(
            EventKind::CheckoutStepChanged,
            Rc::new(move |event| {
                if let ShopEvent::CheckoutStepChanged { step } = event {
                    match step {
                        CheckoutStep::Payment => payment_for_step.borrow_mut().show(),
                        CheckoutStep::Contacts => contacts_for_step.borrow_mut().show(),
                    }
                }
            }),
        );

        // UI: payment method toggle.
        let checkout_for_payment = checkout.clone();
        bus.on(
            EventKind::PaymentSelected,
            Rc::new(move |event| {
                if let ShopEvent::PaymentSelected { method } = event {
                    checkout_for_payment.borrow_mut().set_payment(*method);
                }
            }),
        );

        // UI: form field edits, routed by the field discriminant.
        let checkout_for_field = checkout.clone();
        bus.on(
            EventKind::CheckoutFieldChanged,
            Rc::new(move |event| {
                if let ShopEvent::CheckoutFieldChanged { field, value } = event {
                    checkout_for_field
                        .borrow_mut()
                        .set_field(*field, value.clone());
                }
            }),
        );

        // Model: payment group validation outcomes drive the payment form.
        let payment_for_valid = payment_view.clone();
        bus.on(
            EventKind::PaymentStepValid,
            Rc::new(move |_| {
                let mut view = payment_for_valid.borrow_mut();
                view.set_errors(&Default::default());
                view.set_valid(true);
            }),
        );
        bus.on(
            EventKind::PaymentValidationFailed,
            Rc::new(move |event| {
                if let ShopEvent::PaymentValidationFailed { errors } = event {
                    let mut view = payment_view.borrow_mut();
                    view.set_errors(errors);
                    view.set_valid(false);
                }
            }),
        );

        // Model: contacts group validation outcomes drive the contacts form.
        let contacts_for_valid = contacts_view.clone();
        bus.on(
            EventKind::ContactsStepValid,
            Rc::new(move |_| {
                let mut view = contacts_for_valid.borrow_mut();
                view.set_errors(&Default::default());
                view.set_valid(true);
            }),
        );
        bus.on(
            EventKind::ContactsValidationFailed,
            Rc::new(move |event| {
                if let ShopEvent::ContactsValidationFailed { errors } = event {
                    let mut view = contacts_view.borrow_mut();
                    view.set_errors(errors);
                    view.set_valid(false);
                }
            }),
        );

        // Model: a confirmed order shows the success banner.
        bus.on(
            EventKind::OrderCompleted,
            Rc::new(move |event| {
                if let ShopEvent::OrderCompleted { total } = event {
                    success_view.borrow_mut().show_success(*total);
                }
            }),
        );

        Self {
            bus,
            checkout,
            cart,
            api,
        }
    }

    /// Submit the order, gated on a synchronous contacts re-validation
    ///
    /// A failing re-check aborts with no network call; the validation event
    /// it emits is the only signal. On success the cart is cleared, the
    /// form reset, and the completion event carries the charged total. On
    /// rejection the message is surfaced and all state is left for retry.
    pub async fn submit_order(&self) {
        if self.checkout.borrow().is_submitting() {
            tracing::debug!("submit ignored, an order is already in flight");
            return;
        }

        if !self.checkout.borrow_mut().validate_contacts_step() {
            return;
        }

        let submission = self.checkout.borrow().submission();
        let submission = match submission {
            Some(submission) => submission,
            None => {
                // No payment method: the payment step never validated.
                self.checkout.borrow_mut().validate_payment_step();
                return;
            }
        };

        self.checkout.borrow_mut().set_submitting(true);
        let result = self.api.submit_order(&submission).await;

        match result {
            Ok(receipt) => {
                tracing::info!(order_id = %receipt.id, total = receipt.total, "order accepted");
                self.cart.borrow_mut().clear();
                self.checkout.borrow_mut().reset();
                self.bus.emit(ShopEvent::OrderCompleted {
                    total: receipt.total,
                });
            }
            Err(error) => {
                tracing::error!(%error, "order submission failed");
                self.checkout.borrow_mut().set_submitting(false);
                self.bus.emit(ShopEvent::OrderFailed {
                    message: error.to_string(),
                });
            }
        }
    }
}
