//! Request limits.
//!
//! The root only answers GET/HEAD, so bodies are capped small and rejected
//! with 413 Payload Too Large.

use tower_http::limit::RequestBodyLimitLayer;

use crate::config::SecurityConfig;

pub fn body_limit_layer(config: &SecurityConfig) -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(config.max_body_size)
}
