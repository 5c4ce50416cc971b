//! # Events Module
//!
//! The event system: the synchronous bus, the closed event union, and the
//! shared vocabulary types used across its payloads.

pub mod event_bus;
pub mod shop_events;
pub mod types;

pub use event_bus::{EventBus, EventHandler, SubscriptionId};
pub use shop_events::{EventKind, ShopEvent};
pub use types::{CheckoutField, CheckoutStep, PaymentMethod};
