//! # Larek - Event-Driven Storefront Core
//!
//! Product catalog, shopping cart, and two-step checkout for the Web-Larek
//! shop, kept consistent by a synchronous publish/subscribe event bus.
//!
//! ## Architecture
//!
//! The core follows the Model-View-Presenter pattern; no component calls
//! across the model/view boundary directly:
//!
//! ```text
//! ┌─────────────┐   UI events    ┌──────────────┐   mutators    ┌─────────┐
//! │    Views    │───────────────▶│  Presenters  │──────────────▶│ Models  │
//! │             │                │              │               │         │
//! │ - render    │                │ - wiring     │               │ - cart  │
//! │ - setters   │◀───────────────│ - API calls  │◀──────────────│ - form  │
//! └─────────────┘   render /     └──────────────┘  model events └─────────┘
//!                   update calls        ▲
//!                                       │ every event
//!                                       ▼
//!                                ┌──────────────┐
//!                                │   EventBus   │
//!                                │              │
//!                                │ - on / off   │
//!                                │ - emit       │
//!                                └──────────────┘
//! ```
//!
//! Dispatch is synchronous and depth-first; the only suspension points are
//! the two network calls (catalog fetch, order submission), which the
//! presenters invoke directly because they are external effects.

pub mod config;
pub mod store;

// Re-export main types for easy access
pub use store::*;
