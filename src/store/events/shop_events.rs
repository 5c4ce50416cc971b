//! # Shop Events
//!
//! The closed union of every event that travels over the bus, UI-originated
//! and model-originated alike. Handlers subscribe to an [`EventKind`] and
//! receive the matching [`ShopEvent`] payload, so a handler can never be
//! registered against the wrong payload shape.

use std::rc::Rc;

use super::types::{CheckoutField, CheckoutStep, PaymentMethod};
use crate::store::models::{FormErrors, OrderSnapshot, Product};

/// Every event the storefront can emit
#[derive(Debug, Clone, PartialEq)]
pub enum ShopEvent {
    // ---- UI-originated ----
    /// A catalog card was clicked
    ProductSelected { id: String },

    /// The previewed product should be added to the cart
    CartAddRequested,

    /// A cart entry's delete control was clicked
    CartRemoveRequested { id: String },

    /// The header cart button was clicked
    CartOpenRequested,

    /// Checkout began from the cart view
    CheckoutStarted,

    /// A payment method button was toggled
    PaymentSelected { method: PaymentMethod },

    /// A checkout form field changed
    CheckoutFieldChanged { field: CheckoutField, value: String },

    /// The payment step's "next" control was clicked
    ContactsStepRequested,

    /// The contacts step's "pay" control was clicked
    SubmitRequested,

    // ---- Model-originated ----
    /// The catalog was replaced with freshly fetched products
    CatalogChanged { products: Vec<Rc<Product>> },

    /// Another product became the current preview
    PreviewChanged { product: Rc<Product> },

    /// Cart contents changed; carries the full snapshot
    CartChanged { items: Vec<Rc<Product>>, total: u64 },

    /// The checkout flow moved to a different step
    CheckoutStepChanged { step: CheckoutStep },

    /// Payment group validated clean; payload is the order so far
    PaymentStepValid { order: OrderSnapshot },

    /// Contacts group validated clean; payload is the order so far
    ContactsStepValid { order: OrderSnapshot },

    /// Payment group validation failed
    PaymentValidationFailed { errors: FormErrors },

    /// Contacts group validation failed
    ContactsValidationFailed { errors: FormErrors },

    /// The server accepted the order; carries the charged total
    OrderCompleted { total: u64 },

    /// The server rejected the order or the transport failed
    OrderFailed { message: String },
}

/// Discriminant used for subscription; one per [`ShopEvent`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ProductSelected,
    CartAddRequested,
    CartRemoveRequested,
    CartOpenRequested,
    CheckoutStarted,
    PaymentSelected,
    CheckoutFieldChanged,
    ContactsStepRequested,
    SubmitRequested,
    CatalogChanged,
    PreviewChanged,
    CartChanged,
    CheckoutStepChanged,
    PaymentStepValid,
    ContactsStepValid,
    PaymentValidationFailed,
    ContactsValidationFailed,
    OrderCompleted,
    OrderFailed,
}

impl ShopEvent {
    /// The kind handlers subscribe against
    pub fn kind(&self) -> EventKind {
        match self {
            ShopEvent::ProductSelected { .. } => EventKind::ProductSelected,
            ShopEvent::CartAddRequested => EventKind::CartAddRequested,
            ShopEvent::CartRemoveRequested { .. } => EventKind::CartRemoveRequested,
            ShopEvent::CartOpenRequested => EventKind::CartOpenRequested,
            ShopEvent::CheckoutStarted => EventKind::CheckoutStarted,
            ShopEvent::PaymentSelected { .. } => EventKind::PaymentSelected,
            ShopEvent::CheckoutFieldChanged { .. } => EventKind::CheckoutFieldChanged,
            ShopEvent::ContactsStepRequested => EventKind::ContactsStepRequested,
            ShopEvent::SubmitRequested => EventKind::SubmitRequested,
            ShopEvent::CatalogChanged { .. } => EventKind::CatalogChanged,
            ShopEvent::PreviewChanged { .. } => EventKind::PreviewChanged,
            ShopEvent::CartChanged { .. } => EventKind::CartChanged,
            ShopEvent::CheckoutStepChanged { .. } => EventKind::CheckoutStepChanged,
            ShopEvent::PaymentStepValid { .. } => EventKind::PaymentStepValid,
            ShopEvent::ContactsStepValid { .. } => EventKind::ContactsStepValid,
            ShopEvent::PaymentValidationFailed { .. } => EventKind::PaymentValidationFailed,
            ShopEvent::ContactsValidationFailed { .. } => EventKind::ContactsValidationFailed,
            ShopEvent::OrderCompleted { .. } => EventKind::OrderCompleted,
            ShopEvent::OrderFailed { .. } => EventKind::OrderFailed,
        }
    }
}
