//! # Cart Model
//!
//! The products the user intends to buy, in insertion order. Each product
//! may appear at most once: adding an id that is already present is a
//! no-op. Every mutating call emits exactly one cart-changed event with the
//! new snapshot; reads never emit.

use std::rc::Rc;

use crate::store::events::{EventBus, ShopEvent};
use crate::store::models::Product;

pub struct CartModel {
    events: Rc<EventBus>,
    items: Vec<Rc<Product>>,
}

impl CartModel {
    pub fn new(events: Rc<EventBus>) -> Self {
        Self {
            events,
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[Rc<Product>] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of entry prices; a priceless entry contributes 0
    pub fn total(&self) -> u64 {
        self.items.iter().map(|p| p.price.unwrap_or(0)).sum()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Ids of the cart entries, in display order
    pub fn item_ids(&self) -> Vec<String> {
        self.items.iter().map(|p| p.id.clone()).collect()
    }

    /// Append a product unless its id is already present
    ///
    /// A duplicate add changes nothing and therefore emits nothing.
    pub fn add_product(&mut self, product: Rc<Product>) {
        if self.contains(&product.id) {
            tracing::debug!(id = %product.id, "duplicate cart add ignored");
            return;
        }
        self.items.push(product);
        self.emit_changed();
    }

    /// Remove the entry with the given id; absent ids are a no-op
    pub fn remove_product(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        if self.items.len() != before {
            self.emit_changed();
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.emit_changed();
    }

    fn emit_changed(&self) {
        self.events.emit(ShopEvent::CartChanged {
            items: self.items.clone(),
            total: self.total(),
        });
    }
}
