//! Logging setup, trace-context propagation and span helpers

use std::{collections::HashMap, fmt::Display, future::Future};

use axum::http::HeaderMap;
use tracing::{field, info_span, Instrument, Span};
use uuid::Uuid;

use crate::model::Order;

/// Header carrying the W3C trace parent
pub const TRACEPARENT: &str = "traceparent";
/// Header carrying the W3C vendor trace state
pub const TRACESTATE: &str = "tracestate";

/// Initialize the global subscriber
///
/// `RUST_LOG` wins over the level derived from the command line.
pub fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "coffeeshop_barista={},tower_http=info",
            log_level
        ))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Trace-context carrier threaded from a transport into order processing
///
/// Keys are stored lowercased; only the W3C propagation keys are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceContext {
    fields: HashMap<String, String>,
}

impl TraceContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract from a string key/value carrier such as message headers
    pub fn from_carrier<'a, I>(carrier: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let fields = carrier
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v.clone()))
            .filter(|(k, _)| k == TRACEPARENT || k == TRACESTATE)
            .collect();
        Self { fields }
    }

    /// Extract from HTTP request headers
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let fields = [TRACEPARENT, TRACESTATE]
            .into_iter()
            .filter_map(|key| {
                let value = headers.get(key)?.to_str().ok()?;
                Some((key.to_string(), value.to_string()))
            })
            .collect();
        Self { fields }
    }

    pub fn traceparent(&self) -> Option<&str> {
        self.fields.get(TRACEPARENT).map(String::as_str)
    }

    pub fn tracestate(&self) -> Option<&str> {
        self.fields.get(TRACESTATE).map(String::as_str)
    }
}

/// Root span for one order's whole cook path
pub fn order_span(order_id: Uuid, order: &Order, trace: &TraceContext) -> Span {
    let span = info_span!(
        "order",
        order_id = %order_id,
        coffee = %order.coffee,
        size = field::Empty,
        traceparent = field::Empty,
        tracestate = field::Empty,
        error = field::Empty,
        otel.status_code = field::Empty,
    );
    if let Some(size) = order.size {
        span.record("size", size.millilitres());
    }
    if let Some(parent) = trace.traceparent() {
        span.record("traceparent", parent);
    }
    if let Some(state) = trace.tracestate() {
        span.record("tracestate", state);
    }
    span
}

/// Span for one logical step inside an order
pub fn step_span(step: &'static str) -> Span {
    info_span!(
        "step",
        step,
        error = field::Empty,
        otel.status_code = field::Empty,
    )
}

/// Mark a span as failed with the given error
pub fn record_error(span: &Span, err: &dyn Display) {
    span.record("error", field::display(err));
    span.record("otel.status_code", "ERROR");
}

/// Run `fut` inside `span`, recording its error on the span if it fails
///
/// The span closes when the last handle drops, on every exit path.
pub async fn traced<T, E, F>(span: Span, fut: F) -> Result<T, E>
where
    E: Display,
    F: Future<Output = Result<T, E>>,
{
    let result = fut.instrument(span.clone()).await;
    if let Err(e) = &result {
        record_error(&span, e);
    }
    result
}
