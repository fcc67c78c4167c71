//! Transport adapters module
//!
//! Adapters that decode orders from an outer surface and hand them to the
//! intake. HTTP lives in `api`; message-based delivery lives here.

pub mod messaging;

// Re-export main types
pub use messaging::{Message, OrderSubscriber, DEFAULT_TOPIC};
