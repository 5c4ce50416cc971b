//! # Checkout Model
//!
//! In-progress order state for the two-step checkout form. The payment
//! group (method + address) and the contacts group (email + phone) are
//! validated independently; each validation pass recomputes the error
//! mapping wholesale and emits exactly one event, either the step's valid
//! event carrying the order snapshot or the step's validation event
//! carrying the errors.
//!
//! A phone number entered with a leading `8` is stored as `+7…`: the
//! normalized value is what gets validated and submitted.

use std::rc::Rc;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::store::events::{CheckoutField, EventBus, PaymentMethod, ShopEvent};
use crate::store::models::messages;

static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[а-яА-ЯёЁa-zA-Z0-9\s/.,-]{7,}$").unwrap());
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[\d() -]{10,}$").unwrap());

/// Field-to-message mapping recomputed on every validation pass
///
/// A `None` field is passing; failing fields carry the message to show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors {
    pub address: Option<String>,
    pub payment: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.address.is_none()
            && self.payment.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }

    /// Failing fields with their messages, in form order
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("address", &self.address),
            ("payment", &self.payment),
            ("email", &self.email),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter_map(|(name, msg)| msg.as_deref().map(|m| (name, m)))
        .collect()
    }
}

/// Everything the checkout form has collected so far
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSnapshot {
    pub payment: Option<PaymentMethod>,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub total: u64,
    pub items: Vec<String>,
}

/// Completed order in the shape the server accepts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSubmission {
    pub payment: PaymentMethod,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total: u64,
    pub items: Vec<String>,
}

pub struct CheckoutModel {
    events: Rc<EventBus>,
    payment: Option<PaymentMethod>,
    address: String,
    email: String,
    phone: String,
    items: Vec<String>,
    total: u64,
    form_errors: FormErrors,
    submitting: bool,
}

impl CheckoutModel {
    pub fn new(events: Rc<EventBus>) -> Self {
        Self {
            events,
            payment: None,
            address: String::new(),
            email: String::new(),
            phone: String::new(),
            items: Vec::new(),
            total: 0,
            form_errors: FormErrors::default(),
            submitting: false,
        }
    }

    /// Enter the payment step: snapshot the cart's product ids
    pub fn begin(&mut self, items: Vec<String>) {
        self.items = items;
    }

    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    pub fn set_payment(&mut self, method: PaymentMethod) {
        self.payment = Some(method);
        self.validate_payment_step();
    }

    pub fn set_address(&mut self, value: String) {
        self.address = value;
        self.validate_payment_step();
    }

    /// Route a field change to its validation group
    pub fn set_field(&mut self, field: CheckoutField, value: String) {
        match field {
            CheckoutField::Address => self.set_address(value),
            CheckoutField::Email => {
                self.email = value;
                self.validate_contacts_step();
            }
            CheckoutField::Phone => {
                self.phone = value;
                self.validate_contacts_step();
            }
        }
    }

    /// Validate the payment group: address first, then payment method
    ///
    /// Short-circuits on the first failing check, so at most one error
    /// field is populated per pass.
    pub fn validate_payment_step(&mut self) -> bool {
        let mut errors = FormErrors::default();

        if self.address.is_empty() {
            errors.address = Some(messages::ADDRESS_REQUIRED.to_string());
        } else if !ADDRESS_RE.is_match(&self.address) {
            errors.address = Some(messages::ADDRESS_INVALID.to_string());
        } else if self.payment.is_none() {
            errors.payment = Some(messages::PAYMENT_REQUIRED.to_string());
        }

        self.form_errors = errors;
        if self.form_errors.is_empty() {
            self.events.emit(ShopEvent::PaymentStepValid {
                order: self.order_snapshot(),
            });
            true
        } else {
            self.events.emit(ShopEvent::PaymentValidationFailed {
                errors: self.form_errors.clone(),
            });
            false
        }
    }

    /// Validate the contacts group: email and phone report independently
    pub fn validate_contacts_step(&mut self) -> bool {
        let mut errors = FormErrors::default();

        if self.email.is_empty() {
            errors.email = Some(messages::EMAIL_REQUIRED.to_string());
        } else if !EMAIL_RE.is_match(&self.email) {
            errors.email = Some(messages::EMAIL_INVALID.to_string());
        }

        if self.phone.starts_with('8') {
            self.phone = format!("+7{}", &self.phone[1..]);
        }

        if self.phone.is_empty() {
            errors.phone = Some(messages::PHONE_REQUIRED.to_string());
        } else if !PHONE_RE.is_match(&self.phone) {
            errors.phone = Some(messages::PHONE_INVALID.to_string());
        }

        self.form_errors = errors;
        if self.form_errors.is_empty() {
            self.events.emit(ShopEvent::ContactsStepValid {
                order: self.order_snapshot(),
            });
            true
        } else {
            self.events.emit(ShopEvent::ContactsValidationFailed {
                errors: self.form_errors.clone(),
            });
            false
        }
    }

    pub fn order_snapshot(&self) -> OrderSnapshot {
        OrderSnapshot {
            payment: self.payment,
            address: self.address.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            total: self.total,
            items: self.items.clone(),
        }
    }

    /// The order in wire shape; `None` until a payment method is chosen
    pub fn submission(&self) -> Option<CheckoutSubmission> {
        Some(CheckoutSubmission {
            payment: self.payment?,
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            total: self.total,
            items: self.items.clone(),
        })
    }

    /// Back to initial defaults after a confirmed successful submission
    pub fn reset(&mut self) {
        self.payment = None;
        self.address.clear();
        self.email.clear();
        self.phone.clear();
        self.items.clear();
        self.total = 0;
        self.form_errors = FormErrors::default();
        self.submitting = false;
    }

    /// Duplicate-submit gate: true while an order is in flight
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub fn payment(&self) -> Option<PaymentMethod> {
        self.payment
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn form_errors(&self) -> &FormErrors {
        &self.form_errors
    }
}
