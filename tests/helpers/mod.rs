//! Shared helpers for the HTTP-level tests.

#![allow(dead_code)]

use oaksurveys::config::{Config, ContactConfig, ObservabilityConfig, ServerConfig};

/// A config built from test values only; never read from disk.
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3001, // Different port to avoid conflicts
        },
        contact: ContactConfig {
            address: "info@oaksurveys.ie".to_string(),
        },
        observability: ObservabilityConfig {
            log_level: "debug".to_string(),
        },
    }
}

pub fn create_test_app() -> axum::Router {
    oaksurveys::create_app(create_test_config())
}
