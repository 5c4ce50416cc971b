//! # Application Context
//!
//! Builds the whole storefront exactly once (bus, models, API client,
//! presenters) and hands the pieces to whoever drives it. There are no
//! ambient singletons: everything is owned here and injected downward.
//!
//! Events are dispatched two-tier, like the original page: synchronous
//! wiring runs directly over the bus, while the submit intent (the one
//! asynchronous effect a user can trigger) is routed to the checkout
//! presenter so it can await the network.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;

use crate::config::ApiConfig;
use crate::store::events::{EventBus, ShopEvent};
use crate::store::models::{CartModel, CatalogModel, CheckoutModel};
use crate::store::presenters::{CartPresenter, CatalogPresenter, CheckoutPresenter};
use crate::store::services::ShopApi;
use crate::store::views::{
    CartView, CatalogView, CheckoutFormView, PageView, SharedView, SuccessView,
};

/// The view implementations the core drives
pub struct StoreViews {
    pub page: SharedView<dyn PageView>,
    pub catalog: SharedView<dyn CatalogView>,
    pub cart: SharedView<dyn CartView>,
    pub payment_form: SharedView<dyn CheckoutFormView>,
    pub contacts_form: SharedView<dyn CheckoutFormView>,
    pub success: SharedView<dyn SuccessView>,
}

pub struct App {
    bus: Rc<EventBus>,
    catalog: Rc<RefCell<CatalogModel>>,
    cart: Rc<RefCell<CartModel>>,
    checkout: Rc<RefCell<CheckoutModel>>,
    catalog_presenter: CatalogPresenter,
    #[allow(dead_code)]
    cart_presenter: CartPresenter,
    checkout_presenter: CheckoutPresenter,
}

impl App {
    /// Construct and wire the full storefront
    pub fn new(config: ApiConfig, views: StoreViews) -> Self {
        let bus = Rc::new(EventBus::new());
        let api = Rc::new(ShopApi::new(config.base_url, config.cdn_url));

        let catalog = Rc::new(RefCell::new(CatalogModel::new(bus.clone())));
        let cart = Rc::new(RefCell::new(CartModel::new(bus.clone())));
        let checkout = Rc::new(RefCell::new(CheckoutModel::new(bus.clone())));

        let catalog_presenter = CatalogPresenter::new(
            bus.clone(),
            catalog.clone(),
            cart.clone(),
            api.clone(),
            views.catalog,
        );
        let cart_presenter = CartPresenter::new(
            bus.clone(),
            catalog.clone(),
            cart.clone(),
            views.page,
            views.cart,
        );
        let checkout_presenter = CheckoutPresenter::new(
            bus.clone(),
            checkout.clone(),
            cart.clone(),
            api,
            views.payment_form,
            views.contacts_form,
            views.success,
        );

        tracing::info!("storefront wired");
        Self {
            bus,
            catalog,
            cart,
            checkout,
            catalog_presenter,
            cart_presenter,
            checkout_presenter,
        }
    }

    /// Initial catalog fetch
    pub async fn start(&self) -> Result<()> {
        self.catalog_presenter.load_catalog().await
    }

    /// Route one event: async effects to their presenter, the rest onto the bus
    pub async fn handle_event(&self, event: ShopEvent) {
        match event {
            ShopEvent::SubmitRequested => self.checkout_presenter.submit_order().await,
            other => self.bus.emit(other),
        }
    }

    pub fn bus(&self) -> Rc<EventBus> {
        self.bus.clone()
    }

    pub fn catalog_model(&self) -> Rc<RefCell<CatalogModel>> {
        self.catalog.clone()
    }

    pub fn cart_model(&self) -> Rc<RefCell<CartModel>> {
        self.cart.clone()
    }

    pub fn checkout_model(&self) -> Rc<RefCell<CheckoutModel>> {
        self.checkout.clone()
    }
}
