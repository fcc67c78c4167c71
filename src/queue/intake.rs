//! Producer and consumer ends of the hand-off queue

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{mpsc, Mutex as AsyncMutex};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{
    error::SubmitError,
    model::Order,
    state::OrderStats,
    utils::telemetry::TraceContext,
};

use super::job::{Job, JobId};

/// Submission interface shared by every transport
///
/// Cloning is cheap; all clones feed the same queue.
#[derive(Debug, Clone)]
pub struct OrderIntake {
    sender: Arc<Mutex<Option<mpsc::Sender<Job>>>>,
    shutdown: CancellationToken,
    stats: Arc<OrderStats>,
}

impl OrderIntake {
    pub(super) fn new(
        sender: mpsc::Sender<Job>,
        shutdown: CancellationToken,
        stats: Arc<OrderStats>,
    ) -> Self {
        Self {
            sender: Arc::new(Mutex::new(Some(sender))),
            shutdown,
            stats,
        }
    }

    /// Hand an order to the worker pool
    ///
    /// Waits while the single slot is occupied. Returns the job id once the
    /// order sits in the queue; the cook outcome is never reported back.
    /// Fails with `ShuttingDown` if shutdown has begun, including while this
    /// call was waiting for the slot.
    pub async fn submit(&self, order: Order, trace: TraceContext) -> Result<JobId, SubmitError> {
        if self.shutdown.is_cancelled() {
            return Err(SubmitError::ShuttingDown);
        }
        let sender = self.current_sender().ok_or(SubmitError::ShuttingDown)?;

        let job = Job::new(order, trace);
        let id = job.id;

        tokio::select! {
            biased;
            _ = self.shutdown.cancelled() => Err(SubmitError::ShuttingDown),
            sent = sender.send(job) => {
                sent.map_err(|_| SubmitError::ShuttingDown)?;
                self.stats.record_submitted();
                debug!(order_id = %id, "Order queued");
                Ok(id)
            }
        }
    }

    /// Whether new orders are still admitted
    pub fn is_accepting(&self) -> bool {
        !self.shutdown.is_cancelled() && self.current_sender().is_some()
    }

    /// Drop the queue's sending side
    ///
    /// Submits already holding a sender finish or bail out on the shutdown
    /// token; once the last one is gone, workers see end-of-stream.
    pub fn close(&self) {
        let closed = self
            .sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some();
        if closed {
            debug!("Order intake closed");
        }
    }

    fn current_sender(&self) -> Option<mpsc::Sender<Job>> {
        self.sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Receiving end shared by all workers
///
/// Only one worker waits on the channel at a time; the others queue on the
/// lock. The lock is released as soon as a job is taken.
#[derive(Debug, Clone)]
pub struct JobReceiver {
    inner: Arc<AsyncMutex<mpsc::Receiver<Job>>>,
}

impl JobReceiver {
    pub(super) fn new(receiver: mpsc::Receiver<Job>) -> Self {
        Self {
            inner: Arc::new(AsyncMutex::new(receiver)),
        }
    }

    /// Next job, or `None` once the queue is closed and drained
    pub async fn recv(&self) -> Option<Job> {
        self.inner.lock().await.recv().await
    }
}
