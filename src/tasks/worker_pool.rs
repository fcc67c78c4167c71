//! Fixed pool of barista workers draining the hand-off queue

use std::{sync::Arc, time::Instant};

use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::{
    barista::Barista,
    queue::{Job, JobReceiver},
    state::OrderStats,
    utils::telemetry::{order_span, traced},
};

/// Handles to the spawned worker tasks
#[derive(Debug)]
pub struct WorkerPool {
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn `count` workers sharing one queue and one barista
    pub fn spawn(count: usize, jobs: JobReceiver, barista: Barista, stats: Arc<OrderStats>) -> Self {
        let handles = (0..count)
            .map(|worker_id| {
                tokio::spawn(worker_loop(
                    worker_id,
                    jobs.clone(),
                    barista.clone(),
                    Arc::clone(&stats),
                ))
            })
            .collect();

        info!("Spawned {} barista workers", count);
        Self { handles }
    }

    pub fn size(&self) -> usize {
        self.handles.len()
    }

    /// Wait until every worker has exited
    pub async fn join(self) {
        for (worker_id, handle) in self.handles.into_iter().enumerate() {
            if let Err(e) = handle.await {
                error!(worker_id, "Worker task failed: {}", e);
            }
        }
    }
}

/// Take one order at a time until the queue is closed and empty
async fn worker_loop(
    worker_id: usize,
    jobs: JobReceiver,
    barista: Barista,
    stats: Arc<OrderStats>,
) {
    info!(worker_id, "Worker started");

    while let Some(job) = jobs.recv().await {
        process_job(worker_id, job, &barista, &stats).await;
    }

    info!(worker_id, "Queue closed, worker exiting");
}

async fn process_job(worker_id: usize, job: Job, barista: &Barista, stats: &OrderStats) {
    let span = order_span(job.id, &job.order, &job.trace);
    span.in_scope(|| {
        info!(
            worker_id,
            queued_for = ?job.enqueued_at.elapsed(),
            "Got order {}",
            job.id
        )
    });

    let start = Instant::now();
    let outcome = traced(span.clone(), barista.cook(&job.order)).await;

    span.in_scope(|| match outcome {
        Ok(coffee) => {
            stats.record_completed();
            info!(worker_id, "{} for order {} completed in {:?}", coffee, job.id, start.elapsed());
        }
        Err(e) => {
            stats.record_failed();
            warn!(worker_id, error = %e, "Order {} failed after {:?}", job.id, start.elapsed());
        }
    });
}
