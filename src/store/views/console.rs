//! # Console Views
//!
//! Plain-stdout implementations of the view contracts, used by the demo
//! binary. They stand in for the browser's template-cloned DOM fragments.

use std::rc::Rc;

use super::{
    format_price, success_message, CartView, CatalogView, CheckoutFormView, PageView, SuccessView,
};
use crate::store::models::{FormErrors, Product};

/// Header chrome: cart counter
#[derive(Default)]
pub struct ConsolePage;

impl PageView for ConsolePage {
    fn set_cart_counter(&mut self, count: usize) {
        println!("[корзина: {count}]");
    }
}

/// Product gallery + preview dialog
#[derive(Default)]
pub struct ConsoleCatalog;

impl CatalogView for ConsoleCatalog {
    fn render_catalog(&mut self, products: &[Rc<Product>]) {
        println!("— Каталог ({}) —", products.len());
        for (index, product) in products.iter().enumerate() {
            println!(
                "  {:>2}. {} · {} · {}",
                index + 1,
                product.title,
                product.category.css_modifier(),
                format_price(product.price)
            );
        }
    }

    fn render_preview(&mut self, product: &Product, in_cart: bool) {
        println!("— {} —", product.title);
        println!("  {}", product.description);
        println!("  {}", format_price(product.price));
        if in_cart {
            println!("  (уже в корзине)");
        } else if !product.is_purchasable() {
            println!("  (не продаётся)");
        }
    }
}

/// Cart dialog
#[derive(Default)]
pub struct ConsoleCart;

impl CartView for ConsoleCart {
    fn render_cart(&mut self, items: &[Rc<Product>], total: u64) {
        if items.is_empty() {
            println!("Корзина пуста");
            return;
        }
        println!("— Корзина —");
        for (index, product) in items.iter().enumerate() {
            println!(
                "  {:>2}. {} · {}",
                index + 1,
                product.title,
                format_price(product.price)
            );
        }
        println!("  Итого: {}", format_price(Some(total)));
    }
}

/// One checkout form step
pub struct ConsoleForm {
    title: &'static str,
}

impl ConsoleForm {
    pub fn new(title: &'static str) -> Self {
        Self { title }
    }
}

impl CheckoutFormView for ConsoleForm {
    fn show(&mut self) {
        println!("— {} —", self.title);
    }

    fn set_valid(&mut self, valid: bool) {
        if valid {
            println!("  [{}: можно продолжать]", self.title);
        }
    }

    fn set_errors(&mut self, errors: &FormErrors) {
        for (_, message) in errors.entries() {
            println!("  ! {message}");
        }
    }
}

/// Order-complete banner
#[derive(Default)]
pub struct ConsoleSuccess;

impl SuccessView for ConsoleSuccess {
    fn show_success(&mut self, total: u64) {
        println!("— Заказ оформлен —");
        println!("  {}", success_message(total));
    }
}
