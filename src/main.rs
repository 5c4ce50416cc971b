//! # Larek Main Entry Point
//!
//! Interactive console storefront driving the event-driven core: the
//! console stands in for the browser page, translating typed commands into
//! the same UI events the DOM views would emit.

use std::cell::RefCell;
use std::io::{self, BufRead, Write as _};
use std::rc::Rc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use larek::config::ApiConfig;
use larek::store::views::console::{
    ConsoleCart, ConsoleCatalog, ConsoleForm, ConsolePage, ConsoleSuccess,
};
use larek::store::views::CatalogView;
use larek::store::{App, CheckoutField, EventKind, PaymentMethod, ShopEvent, StoreViews};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let views = StoreViews {
        page: Rc::new(RefCell::new(ConsolePage)),
        catalog: Rc::new(RefCell::new(ConsoleCatalog)),
        cart: Rc::new(RefCell::new(ConsoleCart)),
        payment_form: Rc::new(RefCell::new(ConsoleForm::new("Оплата и адрес"))),
        contacts_form: Rc::new(RefCell::new(ConsoleForm::new("Контакты"))),
        success: Rc::new(RefCell::new(ConsoleSuccess)),
    };
    let app = App::new(ApiConfig::from_env(), views);

    // Surface rejected orders as a console notice.
    app.bus().on(
        EventKind::OrderFailed,
        Rc::new(|event| {
            if let ShopEvent::OrderFailed { message } = event {
                println!("Не удалось оформить заказ: {message}");
            }
        }),
    );

    println!("🛒 Web-Larek console storefront");
    println!("Commands: list, open <n>, add, remove <n>, cart, checkout,");
    println!("          pay <card|cash>, address <text>, next, email <text>,");
    println!("          phone <text>, submit, quit");
    println!();

    if let Err(error) = app.start().await {
        println!("Каталог недоступен: {error:#}");
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        let (command, arg) = match input.split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (input, ""),
        };

        match command {
            "" => {}
            "quit" | "q" => break,
            "list" => {
                let products = app.catalog_model().borrow().products().to_vec();
                ConsoleCatalog.render_catalog(&products);
            }
            "open" => match product_id_at(&app, arg) {
                Some(id) => app.handle_event(ShopEvent::ProductSelected { id }).await,
                None => println!("нет такого товара"),
            },
            "add" => app.handle_event(ShopEvent::CartAddRequested).await,
            "remove" => match cart_id_at(&app, arg) {
                Some(id) => app.handle_event(ShopEvent::CartRemoveRequested { id }).await,
                None => println!("нет такой позиции в корзине"),
            },
            "cart" => app.handle_event(ShopEvent::CartOpenRequested).await,
            "checkout" => app.handle_event(ShopEvent::CheckoutStarted).await,
            "pay" => match arg {
                "card" => {
                    app.handle_event(ShopEvent::PaymentSelected {
                        method: PaymentMethod::Card,
                    })
                    .await
                }
                "cash" => {
                    app.handle_event(ShopEvent::PaymentSelected {
                        method: PaymentMethod::Cash,
                    })
                    .await
                }
                _ => println!("pay card | pay cash"),
            },
            "address" => {
                app.handle_event(ShopEvent::CheckoutFieldChanged {
                    field: CheckoutField::Address,
                    value: arg.to_string(),
                })
                .await
            }
            "next" => app.handle_event(ShopEvent::ContactsStepRequested).await,
            "email" => {
                app.handle_event(ShopEvent::CheckoutFieldChanged {
                    field: CheckoutField::Email,
                    value: arg.to_string(),
                })
                .await
            }
            "phone" => {
                app.handle_event(ShopEvent::CheckoutFieldChanged {
                    field: CheckoutField::Phone,
                    value: arg.to_string(),
                })
                .await
            }
            "submit" => app.handle_event(ShopEvent::SubmitRequested).await,
            other => println!("неизвестная команда: {other}"),
        }
    }

    println!("\n👋 До встречи в Веб-Ларьке!");
    Ok(())
}

/// Catalog product id at a 1-based display index
fn product_id_at(app: &App, arg: &str) -> Option<String> {
    let index = arg.parse::<usize>().ok()?.checked_sub(1)?;
    app.catalog_model()
        .borrow()
        .products()
        .get(index)
        .map(|p| p.id.clone())
}

/// Cart entry id at a 1-based display index
fn cart_id_at(app: &App, arg: &str) -> Option<String> {
    let index = arg.parse::<usize>().ok()?.checked_sub(1)?;
    app.cart_model()
        .borrow()
        .items()
        .get(index)
        .map(|p| p.id.clone())
}
