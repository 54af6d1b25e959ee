//! Tracing setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, Environment};

/// Default filter directives when `RUST_LOG` is not set
pub fn default_directives(config: &Config) -> String {
    format!(
        "{crate_name}={level},tower_http={level}",
        crate_name = env!("CARGO_CRATE_NAME"),
        level = config.log_level
    )
}

/// Initialize tracing/logging
///
/// Development gets human-readable output; staging and production emit JSON
/// lines that include the current span, so request logs carry the service
/// name recorded by the router.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directives(config).into());

    match config.environment {
        Environment::Development => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
        Environment::Staging | Environment::Production => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_current_span(true)
                        .with_target(true),
                )
                .init();
        }
    }

    tracing::info!(
        service = %config.app_name,
        environment = %config.environment,
        "Tracing initialized"
    );
}
