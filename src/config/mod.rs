//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GateConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//!
//! version manifest (JSON)
//!     → manifest.rs (ordered list, newest first)
//!     → VersionList (non-empty, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a process restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod manifest;
pub mod schema;
pub mod validation;

pub use loader::{parse_config, read_config, validated, ConfigError};
pub use manifest::{load_manifest, parse_manifest, ManifestError};
pub use schema::GateConfig;
pub use schema::InstallerConfig;
pub use schema::ListenerConfig;
pub use schema::{LogFormat, ObservabilityConfig, PageConfig, SecurityConfig, TimeoutConfig, VersionsConfig};
