//! State management module
//!
//! Shared inventory, outcome counters and the state handed to HTTP handlers.

pub mod app_state;
pub mod inventory;
pub mod stats;

// Re-export main types
pub use app_state::AppState;
pub use inventory::{InventoryLevels, InventoryStore};
pub use stats::{OrderStats, StatsSnapshot};
