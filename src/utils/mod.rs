//! Utility functions module
//!
//! Signal handling and tracing setup used by the binary and the engine.

pub mod signals;
pub mod telemetry;

// Re-export main functions
pub use signals::cancel_on_signal;
pub use telemetry::{init_tracing, TraceContext};
