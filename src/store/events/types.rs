//! # Core Event Types
//!
//! Common vocabulary shared by events, models, and presenters: payment
//! methods, checkout form fields, and checkout steps.

use serde::{Deserialize, Serialize};

/// How the customer pays for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Online card payment
    Card,
    /// Cash on delivery
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
        }
    }
}

/// Checkout form field discriminant
///
/// Field changes travel as one event variant carrying this discriminant
/// instead of one string-named event per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckoutField {
    Address,
    Email,
    Phone,
}

/// The two screens of the checkout form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckoutStep {
    /// Payment method + delivery address
    Payment,
    /// Email + phone
    Contacts,
}
