//! # Presenters Module
//!
//! The wiring layer: stateless sets of event-handler registrations that
//! connect model mutations to view updates. Presenters never call each
//! other; cross-cutting updates happen because several handlers subscribe
//! to the same model event. The API client is the one collaborator they
//! call directly, because a network request is an external effect, not
//! internal state.

pub mod cart_presenter;
pub mod catalog_presenter;
pub mod checkout_presenter;

pub use cart_presenter::CartPresenter;
pub use catalog_presenter::CatalogPresenter;
pub use checkout_presenter::CheckoutPresenter;
