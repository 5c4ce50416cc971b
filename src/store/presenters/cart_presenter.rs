//! # Cart Presenter
//!
//! Wires the shopping cart: add/remove requests mutate the model, and the
//! model's change event fans out to every interested surface: the header
//! counter and the cart dialog each subscribe independently.

use std::cell::RefCell;
use std::rc::Rc;

use crate::store::events::{EventBus, EventKind, ShopEvent};
use crate::store::models::{CartModel, CatalogModel};
use crate::store::views::{CartView, PageView, SharedView};

pub struct CartPresenter;

impl CartPresenter {
    pub fn new(
        bus: Rc<EventBus>,
        catalog: Rc<RefCell<CatalogModel>>,
        cart: Rc<RefCell<CartModel>>,
        page_view: SharedView<dyn PageView>,
        cart_view: SharedView<dyn CartView>,
    ) -> Self {
        // UI: the preview dialog's buy control adds the previewed product.
        let cart_for_add = cart.clone();
        bus.on(
            EventKind::CartAddRequested,
            Rc::new(move |_| {
                let preview = catalog.borrow().preview();
                match preview {
                    Some(product) if product.is_purchasable() => {
                        cart_for_add.borrow_mut().add_product(product);
                    }
                    Some(product) => {
                        tracing::debug!(id = %product.id, "priceless product not added");
                    }
                    None => tracing::warn!("cart add requested without a preview"),
                }
            }),
        );

        // UI: a cart entry's delete control.
        let cart_for_remove = cart.clone();
        bus.on(
            EventKind::CartRemoveRequested,
            Rc::new(move |event| {
                if let ShopEvent::CartRemoveRequested { id } = event {
                    cart_for_remove.borrow_mut().remove_product(id);
                }
            }),
        );

        // Model: every cart change updates the header counter...
        bus.on(
            EventKind::CartChanged,
            Rc::new(move |event| {
                if let ShopEvent::CartChanged { items, .. } = event {
                    page_view.borrow_mut().set_cart_counter(items.len());
                }
            }),
        );

        // ...and, independently, re-renders the cart dialog.
        let view_for_changed = cart_view.clone();
        bus.on(
            EventKind::CartChanged,
            Rc::new(move |event| {
                if let ShopEvent::CartChanged { items, total } = event {
                    view_for_changed.borrow_mut().render_cart(items, *total);
                }
            }),
        );

        // UI: opening the cart renders the current snapshot.
        bus.on(
            EventKind::CartOpenRequested,
            Rc::new(move |_| {
                let (items, total) = {
                    let cart = cart.borrow();
                    (cart.items().to_vec(), cart.total())
                };
                cart_view.borrow_mut().render_cart(&items, total);
            }),
        );

        Self
    }
}
