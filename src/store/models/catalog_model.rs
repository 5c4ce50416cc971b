//! # Catalog Model
//!
//! Holds the fetched product list and the currently previewed product.
//! The list is replaced wholesale on every successful fetch, never mutated
//! in place, and products themselves are immutable once stored.

use std::rc::Rc;

use crate::store::events::{EventBus, ShopEvent};
use crate::store::models::Product;

pub struct CatalogModel {
    events: Rc<EventBus>,
    products: Vec<Rc<Product>>,
    preview: Option<Rc<Product>>,
}

impl CatalogModel {
    pub fn new(events: Rc<EventBus>) -> Self {
        Self {
            events,
            products: Vec::new(),
            preview: None,
        }
    }

    /// Replace the catalog with a freshly fetched list
    pub fn set_catalog(&mut self, products: Vec<Product>) {
        self.products = products.into_iter().map(Rc::new).collect();
        tracing::debug!(count = self.products.len(), "catalog replaced");
        self.events.emit(ShopEvent::CatalogChanged {
            products: self.products.clone(),
        });
    }

    pub fn products(&self) -> &[Rc<Product>] {
        &self.products
    }

    /// Linear lookup; absent ids are not an error
    pub fn product_by_id(&self, id: &str) -> Option<Rc<Product>> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    /// Record the product the user is inspecting
    ///
    /// The previous preview is displaced, never explicitly cleared: this is
    /// "last selected", not an open/closed flag.
    pub fn set_preview(&mut self, product: Rc<Product>) {
        self.preview = Some(Rc::clone(&product));
        self.events.emit(ShopEvent::PreviewChanged { product });
    }

    pub fn preview(&self) -> Option<Rc<Product>> {
        self.preview.clone()
    }
}
