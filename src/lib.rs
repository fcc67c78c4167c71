//! Coffeeshop Barista - A coffee-order fulfillment engine
//!
//! Orders arrive from transports, wait in a single-slot hand-off queue and are
//! brewed by a fixed pool of workers drawing on a shared, mutex-guarded
//! inventory of milk and coffee.

pub mod api;
pub mod barista;
pub mod config;
pub mod error;
pub mod model;
pub mod queue;
pub mod shop;
pub mod state;
pub mod tasks;
pub mod transport;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use error::{BrewError, SubmitError};
pub use model::{CoffeeSize, CoffeeType, Order, Resource};
pub use shop::{CoffeeShop, ShopSettings};
pub use state::AppState;
pub use utils::{cancel_on_signal, TraceContext};
