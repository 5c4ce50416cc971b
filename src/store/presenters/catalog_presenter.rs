//! # Catalog Presenter
//!
//! Wires the product catalog: fetches it from the API on startup, routes
//! card clicks into the preview selection, and re-renders the gallery and
//! preview dialog when the model announces changes.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};

use crate::store::events::{EventBus, EventKind, ShopEvent};
use crate::store::models::{CartModel, CatalogModel};
use crate::store::services::ShopApi;
use crate::store::views::{CatalogView, SharedView};

pub struct CatalogPresenter {
    api: Rc<ShopApi>,
    catalog: Rc<RefCell<CatalogModel>>,
}

impl CatalogPresenter {
    pub fn new(
        bus: Rc<EventBus>,
        catalog: Rc<RefCell<CatalogModel>>,
        cart: Rc<RefCell<CartModel>>,
        api: Rc<ShopApi>,
        catalog_view: SharedView<dyn CatalogView>,
    ) -> Self {
        // UI: a card click becomes the current preview.
        let catalog_for_select = catalog.clone();
        bus.on(
            EventKind::ProductSelected,
            Rc::new(move |event| {
                if let ShopEvent::ProductSelected { id } = event {
                    let product = catalog_for_select.borrow().product_by_id(id);
                    match product {
                        Some(product) => catalog_for_select.borrow_mut().set_preview(product),
                        None => tracing::warn!(%id, "selected product not in catalog"),
                    }
                }
            }),
        );

        // Model: a replaced catalog re-renders the gallery.
        let view_for_catalog = catalog_view.clone();
        bus.on(
            EventKind::CatalogChanged,
            Rc::new(move |event| {
                if let ShopEvent::CatalogChanged { products } = event {
                    view_for_catalog.borrow_mut().render_catalog(products);
                }
            }),
        );

        // Model: a new preview re-renders the dialog, with the cart state
        // deciding whether the buy control reads "add" or "already added".
        let view_for_preview = catalog_view;
        bus.on(
            EventKind::PreviewChanged,
            Rc::new(move |event| {
                if let ShopEvent::PreviewChanged { product } = event {
                    let in_cart = cart.borrow().contains(&product.id);
                    view_for_preview
                        .borrow_mut()
                        .render_preview(product, in_cart);
                }
            }),
        );

        Self { api, catalog }
    }

    /// Fetch the catalog and hand it to the model
    ///
    /// Called once at startup and again on explicit reload; the model emits
    /// the change event that triggers rendering.
    pub async fn load_catalog(&self) -> Result<()> {
        let products = self
            .api
            .get_products()
            .await
            .context("failed to load catalog")?;
        self.catalog.borrow_mut().set_catalog(products);
        Ok(())
    }
}
