//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Installer template must produce an absolute http(s) URL
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GateConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system
//! - An empty version list is not checked here; it is fatal at startup once
//!   the manifest has been read

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::GateConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),

    #[error("installer.base_host `{0}` is not an absolute http(s) URL")]
    BaseHost(String),

    #[error("installer.tool must be non-empty and contain no '/', '@' or whitespace")]
    Tool,

    #[error("installer.entry_resource must be non-empty")]
    EntryResource,

    #[error("timeouts.request_secs must be greater than zero")]
    RequestTimeout,

    #[error("observability.metrics_address `{0}` is not a socket address")]
    MetricsAddress(String),

    #[error("security.max_body_size must be greater than zero")]
    MaxBodySize,
}

/// Validate a parsed configuration.
pub fn validate_config(config: &GateConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let base_host = &config.installer.base_host;
    match Url::parse(base_host) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
        _ => errors.push(ValidationError::BaseHost(base_host.clone())),
    }

    let tool = &config.installer.tool;
    if tool.is_empty() || tool.contains(|c: char| c == '/' || c == '@' || c.is_whitespace()) {
        errors.push(ValidationError::Tool);
    }

    if config.installer.entry_resource.trim_start_matches('/').is_empty() {
        errors.push(ValidationError::EntryResource);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::RequestTimeout);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::MaxBodySize);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&GateConfig::default()), Ok(()));
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = GateConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.installer.base_host = "deno.land".into();
        config.installer.tool = "fresh@1".into();
        config.installer.entry_resource = "/".into();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::BaseHost("deno.land".into())));
        assert!(errors.contains(&ValidationError::Tool));
        assert!(errors.contains(&ValidationError::EntryResource));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = GateConfig::default();
        config.installer.base_host = "ftp://example.com".into();
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::BaseHost("ftp://example.com".into())])
        );
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = GateConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::MetricsAddress("nope".into())])
        );
    }
}
