//! API module
//!
//! HTTP API endpoints and middleware.

mod app_info;
pub mod middleware;
pub mod routes;

use std::any::Any as PanicPayload;
use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, Method, Request};
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{MakeSpan, TraceLayer};
use tracing::Span;

use crate::config::CorsConfig;
use crate::error::AppError;
use crate::state::AppState;

pub use app_info::AppInfo;
pub use routes::create_router;

/// Header carrying the per-request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the application router
///
/// `service_name` is recorded on every request span, so each log line
/// emitted while serving a request carries it.
pub fn build_router(state: AppState, service_name: &str, cors: &CorsConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    // Note: Axum layers are applied in reverse order (last added = first executed)
    // Order: request id -> trace -> context -> logging -> panic guard -> handler
    Router::new()
        // Health check
        .route("/health", get(health_check))
        .nest("/v1", create_router())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(axum::middleware::from_fn(
            middleware::request_context_middleware,
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(ServiceSpan::new(service_name)))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(cors_layer(cors))
        .with_state(state)
}

/// Request span tagged with the service name
#[derive(Debug, Clone)]
pub struct ServiceSpan {
    service: Arc<str>,
}

impl ServiceSpan {
    pub fn new(service: &str) -> Self {
        Self {
            service: Arc::from(service),
        }
    }
}

impl<B> MakeSpan<B> for ServiceSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            service = %self.service,
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
        )
    }
}

/// Turn a handler panic into a 500 error body
fn panic_response(panic: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(format!("handler panicked: {}", message)).into_response()
}

/// CORS policy; no configured origins means any origin
pub fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cors
        .allow_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let headers: Vec<HeaderName> = cors
        .allow_headers
        .iter()
        .filter_map(|header| HeaderName::from_bytes(header.as_bytes()).ok())
        .chain([
            axum::http::header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(headers);

    if cors.allow_origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(cors.allow_credentials)
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
