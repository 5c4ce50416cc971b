//! # Services Module
//!
//! External collaborators the presenters call directly (never over the
//! bus): the storefront REST API.

pub mod api;

pub use api::{ApiError, ApiListResponse, OrderReceipt, ShopApi};
