//! # Product Types
//!
//! Wire-facing product data: immutable once fetched, owned by the catalog
//! and referenced (never copied) by the cart.

use serde::{Deserialize, Serialize};

/// Product category; the vocabulary is fixed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "софт-скил")]
    SoftSkill,
    #[serde(rename = "хард-скил")]
    HardSkill,
    #[serde(rename = "кнопка")]
    Button,
    #[serde(rename = "дополнительное")]
    Additional,
    #[serde(rename = "другое")]
    Other,
}

impl Category {
    /// CSS class modifier the views append to `card__category_`
    pub fn css_modifier(&self) -> &'static str {
        match self {
            Category::SoftSkill => "soft",
            Category::HardSkill => "hard",
            Category::Button => "button",
            Category::Additional => "additional",
            Category::Other => "other",
        }
    }
}

/// A catalog product
///
/// `price` is `None` for priceless items: they render as "Бесценно" and
/// contribute nothing to cart totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: Option<u64>,
    pub category: Category,
    pub image: String,
}

impl Product {
    /// Priceless products cannot be bought; views disable the cart control
    pub fn is_purchasable(&self) -> bool {
        self.price.is_some()
    }
}
