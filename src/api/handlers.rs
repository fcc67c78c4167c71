//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use tracing::{info, warn};

use crate::{
    model::Order,
    state::AppState,
    utils::telemetry::TraceContext,
};
use super::responses::{HealthResponse, OrderResponse, StatusResponse};

/// Handle POST /order - Queue an order for the barista
///
/// Returns as soon as the order is in the queue; the brew outcome is only
/// logged.
pub async fn order_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let order: Order = match serde_json::from_slice(&body) {
        Ok(order) => order,
        Err(e) => {
            warn!("Rejecting malformed order: {}", e);
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };

    let trace = TraceContext::from_headers(&headers);

    match state.shop.intake.submit(order, trace).await {
        Ok(order_id) => {
            info!(%order_id, "Order endpoint called - order queued");
            (StatusCode::ACCEPTED, Json(OrderResponse::accepted(order_id))).into_response()
        }
        Err(e) => {
            warn!("Order refused: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(OrderResponse::rejected(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Handle GET /status - Return stock levels and order counters
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        inventory: state.shop.inventory.snapshot(),
        orders: state.shop.stats.snapshot(),
        accepting_orders: state.shop.intake.is_accepting(),
        workers: state.shop.workers,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
