//! Graceful shutdown of the order pipeline

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::queue::OrderIntake;

use super::WorkerPool;

/// Drives the pipeline from "accepting orders" to "all workers gone"
///
/// Once the token fires, intake refuses new orders and the queue is closed.
/// Workers finish the drink in hand, drain what is left in the queue, then
/// exit. Nothing is aborted mid-step.
#[derive(Debug)]
pub struct ShutdownCoordinator {
    shutdown: CancellationToken,
    intake: OrderIntake,
    pool: WorkerPool,
}

impl ShutdownCoordinator {
    pub fn new(shutdown: CancellationToken, intake: OrderIntake, pool: WorkerPool) -> Self {
        Self {
            shutdown,
            intake,
            pool,
        }
    }

    /// Wait for the cancellation signal, then for every worker to exit
    pub async fn run(self) {
        self.shutdown.cancelled().await;
        info!("Shutdown requested, closing order intake");

        self.intake.close();

        let workers = self.pool.size();
        self.pool.join().await;
        info!("All {} workers stopped", workers);
    }
}
