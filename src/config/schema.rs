//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gate.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the landing gate.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Installer URL template constants.
    pub installer: InstallerConfig,

    /// Where the release version list comes from.
    pub versions: VersionsConfig,

    /// Copy for the default landing page renderer.
    pub page: PageConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Installer URL template: `<base_host>/x/<tool>@v<version>/<entry_resource>`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct InstallerConfig {
    /// Scheme and host the installer is served from.
    pub base_host: String,

    /// Module name on the host.
    pub tool: String,

    /// Script fetched by the installer pipe.
    pub entry_resource: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            base_host: "https://deno.land".to_string(),
            tool: "fresh".to_string(),
            entry_resource: "init.ts".to_string(),
        }
    }
}

/// Version list source. The manifest wins over the inline list.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct VersionsConfig {
    /// JSON manifest: an array of version strings, newest first.
    pub manifest: Option<String>,

    /// Inline versions, newest first.
    pub list: Vec<String>,
}

/// Landing page copy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub description: String,

    /// Optional banner shown above the page.
    pub announcement: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Ponder - A simple ORM for PostgreSQL in Deno.".to_string(),
            description:
                "Basic CRUD functionality, managing tables, and introspection for PostgreSQL in Deno."
                    .to_string(),
            announcement: None,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security headers.
    pub enable_headers: bool,
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            max_body_size: 64 * 1024, // 64KB, the root only serves GET
        }
    }
}
