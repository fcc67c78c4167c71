//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::{InventoryLevels, StatsSnapshot};

/// Response to an order submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl OrderResponse {
    /// The order is queued; brewing happens later
    pub fn accepted(order_id: Uuid) -> Self {
        Self {
            status: "accepted".to_string(),
            order_id: Some(order_id),
            message: None,
            timestamp: Utc::now(),
        }
    }

    /// The order was not admitted
    pub fn rejected(message: String) -> Self {
        Self {
            status: "rejected".to_string(),
            order_id: None,
            message: Some(message),
            timestamp: Utc::now(),
        }
    }
}

/// Engine status: stock levels, order counters and server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub inventory: InventoryLevels,
    pub orders: StatsSnapshot,
    pub accepting_orders: bool,
    pub workers: usize,
    pub uptime: String,
    pub port: u16,
    pub host: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
