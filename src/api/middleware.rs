//! API Middleware
//!
//! Request context and request logging middleware.

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::domain::OperationContext;

use super::REQUEST_ID_HEADER;

/// Header clients may use to supply their own correlation id
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

// =========================================================================
// Request context
// =========================================================================

/// Resolve the correlation id for a request: the request id set by
/// `SetRequestIdLayer`, else a client-supplied correlation id, else a fresh one.
pub fn correlation_id_from_headers(headers: &HeaderMap) -> Uuid {
    [REQUEST_ID_HEADER, CORRELATION_ID_HEADER]
        .iter()
        .filter_map(|name| headers.get(*name))
        .filter_map(|value| value.to_str().ok())
        .find_map(|value| Uuid::parse_str(value).ok())
        .unwrap_or_else(Uuid::new_v4)
}

/// Build the `OperationContext` for the request and store it as an extension
pub async fn request_context_middleware(mut request: Request<Body>, next: Next) -> Response {
    let correlation_id = correlation_id_from_headers(request.headers());

    let mut context = OperationContext::new().with_correlation_id(correlation_id);

    if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        context = context.with_client_ip(addr.ip());
    }

    request.extensions_mut().insert(context);

    next.run(request).await
}

// =========================================================================
// mask_headers_for_logging
// =========================================================================

/// Headers that should be masked in logs
const SENSITIVE_HEADERS: &[&str] = &[
    "x-api-key",
    "authorization",
    "proxy-authorization",
    "cookie",
    "set-cookie",
];

/// Mask sensitive headers for logging
pub fn mask_headers_for_logging(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let name_lower = name.as_str().to_lowercase();
            let masked_value = if SENSITIVE_HEADERS.contains(&name_lower.as_str()) {
                "[REDACTED]".to_string()
            } else {
                value.to_str().unwrap_or("[invalid utf8]").to_string()
            };
            (name.to_string(), masked_value)
        })
        .collect()
}

// =========================================================================
// Request Logging Middleware
// =========================================================================

/// Request logging middleware
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let version = request.version();

    // Mask sensitive headers
    let headers = mask_headers_for_logging(request.headers());

    let correlation_id = request
        .extensions()
        .get::<OperationContext>()
        .and_then(|ctx| ctx.correlation_id);

    let start = std::time::Instant::now();

    tracing::debug!(
        method = %method,
        uri = %uri,
        version = ?version,
        correlation_id = ?correlation_id,
        headers = ?headers,
        "Incoming request"
    );

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status,
            duration_ms = %duration.as_millis(),
            correlation_id = ?correlation_id,
            "Request failed"
        );
    } else {
        tracing::info!(
            method = %method,
            uri = %uri,
            status = %status,
            duration_ms = %duration.as_millis(),
            correlation_id = ?correlation_id,
            "Request completed"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_headers_for_logging() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "application/json".parse().unwrap());
        headers.insert("authorization", "Bearer abc".parse().unwrap());
        headers.insert("x-request-id", "req-123".parse().unwrap());

        let masked = mask_headers_for_logging(&headers);

        let auth = masked.iter().find(|(k, _)| k == "authorization");
        let content_type = masked.iter().find(|(k, _)| k == "content-type");
        let request_id = masked.iter().find(|(k, _)| k == "x-request-id");

        assert_eq!(auth.unwrap().1, "[REDACTED]");
        assert_eq!(content_type.unwrap().1, "application/json");
        assert_eq!(request_id.unwrap().1, "req-123");
    }

    #[test]
    fn test_sensitive_headers_list() {
        assert!(SENSITIVE_HEADERS.contains(&"authorization"));
        assert!(SENSITIVE_HEADERS.contains(&"cookie"));
        assert!(!SENSITIVE_HEADERS.contains(&"content-type"));
    }

    #[test]
    fn test_correlation_id_prefers_request_id() {
        let request_id = Uuid::new_v4();
        let client_id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", request_id.to_string().parse().unwrap());
        headers.insert("x-correlation-id", client_id.to_string().parse().unwrap());

        assert_eq!(correlation_id_from_headers(&headers), request_id);
    }

    #[test]
    fn test_correlation_id_falls_back_to_client_header() {
        let client_id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", "not-a-uuid".parse().unwrap());
        headers.insert("x-correlation-id", client_id.to_string().parse().unwrap());

        assert_eq!(correlation_id_from_headers(&headers), client_id);
    }

    #[test]
    fn test_correlation_id_generated_when_absent() {
        let headers = HeaderMap::new();

        let first = correlation_id_from_headers(&headers);
        let second = correlation_id_from_headers(&headers);

        assert_ne!(first, second);
    }
}
