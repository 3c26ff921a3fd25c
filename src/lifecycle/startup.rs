//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration and apply command-line overrides
//! - Validate configuration
//! - Load the version manifest and build the version list
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - An empty or malformed version list refuses to start rather than serve a
//!   bad redirect
//! - A relative manifest path is resolved against the config file's directory
//! - Runs before logging is initialized, so it reports through its error type

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{load_manifest, read_config, validated, ConfigError, GateConfig, ManifestError};
use crate::negotiate::{VersionList, VersionListError};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Manifest(#[from] ManifestError),

    #[error("unusable release version list ({0}); refusing to start")]
    Versions(#[from] VersionListError),
}

/// Inputs that override the config file.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    pub config_path: Option<PathBuf>,
    pub versions_path: Option<PathBuf>,
    pub bind_address: Option<String>,
}

/// Everything the server needs, validated.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub config: GateConfig,
    pub versions: VersionList,
}

/// Load config and versions, or explain why the service cannot start.
pub fn prepare(options: &StartupOptions) -> Result<Prepared, StartupError> {
    let mut config = match &options.config_path {
        Some(path) => read_config(path)?,
        None => GateConfig::default(),
    };

    if let Some(bind) = &options.bind_address {
        config.listener.bind_address = bind.clone();
    }

    let config = validated(config)?;

    let manifest = options.versions_path.clone().or_else(|| {
        config.versions.manifest.as_ref().map(|m| {
            relative_to(options.config_path.as_deref(), Path::new(m))
        })
    });

    let versions = match manifest {
        Some(path) => load_manifest(&path)?,
        None => config.versions.list.clone(),
    };

    let versions = VersionList::new(versions)?;

    Ok(Prepared { config, versions })
}

fn relative_to(config_path: Option<&Path>, path: &Path) -> PathBuf {
    match config_path.and_then(Path::parent) {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}
