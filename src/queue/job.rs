//! Queue element

use std::time::Instant;

use uuid::Uuid;

use crate::{model::Order, utils::telemetry::TraceContext};

pub type JobId = Uuid;

/// An admitted order together with the context it arrived with
#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub order: Order,
    pub trace: TraceContext,
    pub enqueued_at: Instant,
}

impl Job {
    pub fn new(order: Order, trace: TraceContext) -> Self {
        Self {
            id: Uuid::new_v4(),
            order,
            trace,
            enqueued_at: Instant::now(),
        }
    }
}
