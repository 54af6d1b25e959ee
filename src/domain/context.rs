//! Operation Context
//!
//! Request metadata threaded through the use cases for log correlation.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use uuid::Uuid;

/// Context for an operation, used for tracing.
///
/// The use cases only read it to tag their log lines; it carries no
/// cancellation or authorization semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationContext {
    /// Correlation ID for request tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<Uuid>,

    /// Client IP address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<IpAddr>,
}

impl OperationContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self {
            correlation_id: None,
            client_ip: None,
        }
    }

    /// Create context with correlation ID
    pub fn with_correlation_id(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }

    /// Create context with client IP
    pub fn with_client_ip(mut self, ip: IpAddr) -> Self {
        self.client_ip = Some(ip);
        self
    }

    /// Correlation ID rendered for log fields, `-` when absent
    pub fn correlation(&self) -> String {
        self.correlation_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

impl Default for OperationContext {
    fn default() -> Self {
        Self::new()
    }
}
