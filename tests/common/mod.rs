//! Common test utilities and infrastructure
//!
//! Shared functionality for integration tests: a fully wired application
//! with recording views, an event capture, and product fixtures.

// Each integration binary compiles this module and uses its own subset.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use larek::config::ApiConfig;
use larek::store::views::recording::RecordingView;
use larek::store::{App, Category, Product, ShopEvent, StoreViews};

/// A wired storefront with every view call and bus event recorded
pub struct TestHarness {
    pub app: App,
    /// Shared by the page, catalog, cart, and success contracts
    pub views: Rc<RefCell<RecordingView>>,
    pub payment_form: Rc<RefCell<RecordingView>>,
    pub contacts_form: Rc<RefCell<RecordingView>>,
    pub events: Rc<RefCell<Vec<ShopEvent>>>,
}

/// Wire an application against the given API base URL
pub fn harness(base_url: &str) -> TestHarness {
    let views = Rc::new(RefCell::new(RecordingView::new()));
    let payment_form = Rc::new(RefCell::new(RecordingView::new()));
    let contacts_form = Rc::new(RefCell::new(RecordingView::new()));

    let app = App::new(
        ApiConfig {
            base_url: base_url.to_string(),
            cdn_url: "https://cdn.test/content".to_string(),
        },
        StoreViews {
            page: views.clone(),
            catalog: views.clone(),
            cart: views.clone(),
            payment_form: payment_form.clone(),
            contacts_form: contacts_form.clone(),
            success: views.clone(),
        },
    );

    let events = Rc::new(RefCell::new(Vec::new()));
    let events_clone = events.clone();
    app.bus().on_any(Rc::new(move |event| {
        events_clone.borrow_mut().push(event.clone());
    }));

    TestHarness {
        app,
        views,
        payment_form,
        contacts_form,
        events,
    }
}

/// Offline harness for flows that must not reach the network
pub fn offline_harness() -> TestHarness {
    harness("http://127.0.0.1:9")
}

pub fn product(id: &str, price: Option<u64>) -> Product {
    Product {
        id: id.to_string(),
        title: format!("Товар {id}"),
        description: format!("Описание товара {id}"),
        price,
        category: Category::Other,
        image: format!("/{id}.svg"),
    }
}

/// Seed the catalog model directly, bypassing the network
pub fn seed_catalog(harness: &TestHarness, products: Vec<Product>) {
    harness
        .app
        .catalog_model()
        .borrow_mut()
        .set_catalog(products);
}

/// Product JSON in the backend's wire shape
pub fn product_json(id: &str, price: Option<u64>, image: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": format!("Товар {id}"),
        "description": format!("Описание товара {id}"),
        "price": price,
        "category": "другое",
        "image": image,
    })
}
