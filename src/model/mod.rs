//! Domain model module
//!
//! Orders as decoded by transports, and the ingredients they consume.

pub mod order;
pub mod resource;

// Re-export main types
pub use order::{CoffeeSize, CoffeeType, Order};
pub use resource::Resource;
