//! Message subscriber feeding the order intake

use std::{collections::HashMap, ops::ControlFlow};

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::{
    error::SubmitError,
    model::Order,
    queue::OrderIntake,
    utils::telemetry::TraceContext,
};

/// Topic orders are published on
pub const DEFAULT_TOPIC: &str = "order";

/// A published message: subject, string headers and a raw payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub subject: String,
    pub headers: HashMap<String, String>,
    pub payload: Vec<u8>,
}

impl Message {
    pub fn new(subject: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            subject: subject.into(),
            headers: HashMap::new(),
            payload: payload.into(),
        }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// Consumes one topic and submits every decodable order on it
#[derive(Debug)]
pub struct OrderSubscriber {
    topic: String,
    intake: OrderIntake,
    shutdown: CancellationToken,
}

impl OrderSubscriber {
    pub fn new(topic: impl Into<String>, intake: OrderIntake, shutdown: CancellationToken) -> Self {
        Self {
            topic: topic.into(),
            intake,
            shutdown,
        }
    }

    /// Run until the source closes, shutdown fires, or intake stops accepting
    pub async fn run(self, mut messages: mpsc::Receiver<Message>) {
        info!(topic = %self.topic, "Order subscriber started");

        loop {
            let message = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => break,
                message = messages.recv() => match message {
                    Some(message) => message,
                    None => break,
                },
            };

            if self.handle(message).await.is_break() {
                break;
            }
        }

        info!(topic = %self.topic, "Order subscriber stopped");
    }

    async fn handle(&self, message: Message) -> ControlFlow<()> {
        if message.subject != self.topic {
            debug!(subject = %message.subject, "Ignoring message for another topic");
            return ControlFlow::Continue(());
        }

        let order: Order = match serde_json::from_slice(&message.payload) {
            Ok(order) => order,
            Err(e) => {
                warn!("Dropping undecodable order message: {}", e);
                return ControlFlow::Continue(());
            }
        };

        let trace = TraceContext::from_carrier(&message.headers);

        match self.intake.submit(order, trace).await {
            Ok(order_id) => {
                debug!(%order_id, "Order received from topic");
                ControlFlow::Continue(())
            }
            Err(SubmitError::ShuttingDown) => {
                info!("Intake closed, no longer consuming {}", self.topic);
                ControlFlow::Break(())
            }
        }
    }
}
