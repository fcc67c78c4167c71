//! Background tasks module
//!
//! The worker pool that brews queued orders and the coordinator that winds it
//! down on shutdown.

pub mod shutdown;
pub mod worker_pool;

// Re-export main types
pub use shutdown::ShutdownCoordinator;
pub use worker_pool::WorkerPool;
