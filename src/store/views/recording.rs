//! # Recording Views
//!
//! Test doubles for every view contract. Each call is recorded so tests
//! can assert what the presenters asked the view layer to display.

use std::rc::Rc;

use super::{CartView, CatalogView, CheckoutFormView, PageView, SuccessView};
use crate::store::models::{FormErrors, Product};

/// Records every call a presenter makes against the view contracts
#[derive(Default)]
pub struct RecordingView {
    pub cart_counters: Vec<usize>,
    pub rendered_catalogs: Vec<Vec<String>>,
    pub rendered_previews: Vec<(String, bool)>,
    pub rendered_carts: Vec<(Vec<String>, u64)>,
    pub shown: usize,
    pub validity: Vec<bool>,
    pub errors: Vec<FormErrors>,
    pub success_totals: Vec<u64>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_cart_counter(&self) -> Option<usize> {
        self.cart_counters.last().copied()
    }

    pub fn last_errors(&self) -> Option<&FormErrors> {
        self.errors.last()
    }
}

impl PageView for RecordingView {
    fn set_cart_counter(&mut self, count: usize) {
        self.cart_counters.push(count);
    }
}

impl CatalogView for RecordingView {
    fn render_catalog(&mut self, products: &[Rc<Product>]) {
        self.rendered_catalogs
            .push(products.iter().map(|p| p.id.clone()).collect());
    }

    fn render_preview(&mut self, product: &Product, in_cart: bool) {
        self.rendered_previews.push((product.id.clone(), in_cart));
    }
}

impl CartView for RecordingView {
    fn render_cart(&mut self, items: &[Rc<Product>], total: u64) {
        self.rendered_carts
            .push((items.iter().map(|p| p.id.clone()).collect(), total));
    }
}

impl CheckoutFormView for RecordingView {
    fn show(&mut self) {
        self.shown += 1;
    }

    fn set_valid(&mut self, valid: bool) {
        self.validity.push(valid);
    }

    fn set_errors(&mut self, errors: &FormErrors) {
        self.errors.push(errors.clone());
    }
}

impl SuccessView for RecordingView {
    fn show_success(&mut self, total: u64) {
        self.success_totals.push(total);
    }
}
