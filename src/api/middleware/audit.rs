//! Request-audit middleware.
//!
//! Snapshots each API request and its response into an
//! [`AuditRecord`] and hands it to the audit channel. Strictly
//! fire-and-forget: a full queue, a closed channel, or any persistence
//! failure downstream never affects the primary request's outcome.

use std::time::Instant;

use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{HeaderMap, Method},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use serde_json::Value;

use crate::domain::audit::AuditRecord;
use crate::state::AppState;

/// Upper bound for body snapshots. A body larger than this still flows
/// through to the client or handler untouched; only the audit snapshot is
/// dropped.
const MAX_CAPTURED_BODY: usize = 256 * 1024;

pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let date = Utc::now();
    let start = Instant::now();

    let method = req.method().clone();
    let endpoint = req.uri().path().to_string();
    let query = req.uri().query().unwrap_or("").to_string();
    let headers = headers_to_json(req.headers());

    let (req, body) = if body_carrying(&method) {
        capture_request_body(req).await
    } else {
        (req, None)
    };

    let response = next.run(req).await;

    let status_code = response.status().as_u16();
    let (response, snapshot) = capture_response_body(response).await;
    let process_time_ms = start.elapsed().as_millis() as i64;

    let record = AuditRecord {
        date,
        endpoint,
        method: method.to_string(),
        headers,
        body,
        query,
        status_code,
        response: snapshot,
        process_time_ms,
    };

    if let Err(e) = state.audit_tx.try_send(record) {
        tracing::warn!(error = %e, "Failed to queue request audit record");
        metrics::counter!("audit_records_dropped").increment(1);
    }

    response
}

fn body_carrying(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PATCH | Method::PUT)
}

fn headers_to_json(headers: &HeaderMap) -> Value {
    let map: serde_json::Map<String, Value> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                Value::String(String::from_utf8_lossy(value.as_bytes()).into_owned()),
            )
        })
        .collect();

    Value::Object(map)
}

/// Buffers the request body so it can be both recorded and replayed to the
/// handler. An oversized body is replayed in full but not recorded. A body
/// that fails to read is replaced with an empty one; the request was
/// unusable either way.
async fn capture_request_body(req: Request) -> (Request, Option<Value>) {
    let (parts, body) = req.into_parts();

    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let json = if bytes.len() <= MAX_CAPTURED_BODY {
                serde_json::from_slice(&bytes).ok()
            } else {
                None
            };
            (Request::from_parts(parts, Body::from(bytes)), json)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to buffer request body for audit");
            (Request::from_parts(parts, Body::empty()), None)
        }
    }
}

/// Buffers the response body for the snapshot and rebuilds the response from
/// the same bytes, so the client always receives exactly what the handler
/// produced. An oversized body is passed through with a null snapshot.
async fn capture_response_body(response: Response) -> (Response, Value) {
    let (parts, body) = response.into_parts();

    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let snapshot = if bytes.len() <= MAX_CAPTURED_BODY {
                serde_json::from_slice(&bytes).unwrap_or(Value::Null)
            } else {
                Value::Null
            };
            (Response::from_parts(parts, Body::from(bytes)), snapshot)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to buffer response body for audit");
            (Response::from_parts(parts, Body::empty()), Value::Null)
        }
    }
}
