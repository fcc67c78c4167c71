//! Order hand-off queue
//!
//! A bounded channel of capacity one between producers and the worker pool.
//! `OrderIntake::submit` suspends while the slot is occupied, which is the
//! only backpressure producers see. Workers share the single receiving end.

pub mod intake;
pub mod job;

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::state::OrderStats;

// Re-export main types
pub use intake::{JobReceiver, OrderIntake};
pub use job::{Job, JobId};

/// Number of orders that may wait between a producer and the workers
pub const HANDOFF_CAPACITY: usize = 1;

/// Build a connected intake and receiver pair
///
/// Intake refuses new orders once `shutdown` is cancelled.
pub fn handoff(shutdown: CancellationToken, stats: Arc<OrderStats>) -> (OrderIntake, JobReceiver) {
    let (tx, rx) = mpsc::channel(HANDOFF_CAPACITY);
    (OrderIntake::new(tx, shutdown, stats), JobReceiver::new(rx))
}
