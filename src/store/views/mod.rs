//! # Views Module
//!
//! Contracts the presenters drive, shared formatting helpers, and the two
//! shipped implementations: console views for the binary and recording
//! views for tests. The core never reaches into a view beyond these traits,
//! and views never touch models; they only receive derived values.

use std::cell::RefCell;
use std::rc::Rc;

use crate::store::models::{FormErrors, Product};

pub mod console;
pub mod recording;

/// Shared ownership handle presenters keep to a view
pub type SharedView<V> = Rc<RefCell<V>>;

/// The page chrome around the catalog (header cart counter)
pub trait PageView {
    fn set_cart_counter(&mut self, count: usize);
}

/// The product gallery and the preview dialog
pub trait CatalogView {
    fn render_catalog(&mut self, products: &[Rc<Product>]);
    fn render_preview(&mut self, product: &Product, in_cart: bool);
}

/// The cart dialog
pub trait CartView {
    fn render_cart(&mut self, items: &[Rc<Product>], total: u64);
}

/// One step of the checkout form (payment or contacts)
pub trait CheckoutFormView {
    /// Bring this step on screen
    fn show(&mut self);
    /// Enable or disable the step's submit affordance
    fn set_valid(&mut self, valid: bool);
    /// Replace the error text under the form
    fn set_errors(&mut self, errors: &FormErrors);
}

/// The order-complete banner
pub trait SuccessView {
    fn show_success(&mut self, total: u64);
}

/// Price label: priceless products render as "Бесценно"
pub fn format_price(price: Option<u64>) -> String {
    match price {
        Some(value) => format!("{value} синапсов"),
        None => "Бесценно".to_string(),
    }
}

/// Text of the order-complete banner
pub fn success_message(total: u64) -> String {
    format!("Списано {total} синапсов")
}
