//! # Storefront Core
//!
//! Event-driven catalog, cart, and checkout. All cross-layer communication
//! runs over the event bus; no model ever calls a view and no view ever
//! calls a model.

pub mod app;
pub mod events;
pub mod models;
pub mod presenters;
pub mod services;
pub mod views;

pub use app::{App, StoreViews};
pub use events::{CheckoutField, CheckoutStep, EventBus, EventKind, PaymentMethod, ShopEvent};
pub use models::{
    CartModel, CatalogModel, Category, CheckoutModel, CheckoutSubmission, FormErrors,
    OrderSnapshot, Product,
};
pub use presenters::{CartPresenter, CatalogPresenter, CheckoutPresenter};
pub use services::{ApiError, OrderReceipt, ShopApi};
