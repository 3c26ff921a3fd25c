//! Installer URL resolution.
//!
//! # Responsibilities
//! - Hold the process-wide version list (immutable after startup)
//! - Build `<base-host>/x/<tool>@v<latest>/<entry-resource>`
//!
//! # Design Decisions
//! - `VersionList` cannot be empty; emptiness is rejected at construction
//! - Every entry must be printable ASCII with no whitespace or URL
//!   delimiters, so the resolved target is always a valid `Location`
//! - The first element is the latest; order is the producer's contract and is
//!   never checked or re-sorted here
//! - No I/O: resolution is string formatting over in-memory state

use std::sync::Arc;

use thiserror::Error;

use crate::config::InstallerConfig;

/// Raised when there is no version to advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("version list is empty")]
pub struct NoVersionError;

/// Why a version list was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionListError {
    #[error(transparent)]
    Empty(#[from] NoVersionError),

    #[error("version #{index} {version:?} is blank or contains whitespace, control or URL delimiter characters")]
    Invalid { index: usize, version: String },
}

/// Ordered release versions, newest first.
///
/// Cloning is cheap; all clones share the same list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionList {
    versions: Arc<[String]>,
}

impl VersionList {
    /// Build a version list. The producer MUST supply versions in
    /// descending-recency order.
    pub fn new(versions: Vec<String>) -> Result<Self, VersionListError> {
        if versions.is_empty() {
            return Err(NoVersionError.into());
        }
        if let Some((index, version)) = versions
            .iter()
            .enumerate()
            .find(|(_, v)| !is_valid_version(v))
        {
            return Err(VersionListError::Invalid {
                index,
                version: version.clone(),
            });
        }
        Ok(Self {
            versions: versions.into(),
        })
    }

    /// The version to advertise: element 0.
    ///
    /// A misordered list advertises a stale installer; nothing here can tell.
    pub fn latest_version(&self) -> &str {
        &self.versions[0]
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// A version list is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

fn is_valid_version(version: &str) -> bool {
    !version.is_empty()
        && version
            .chars()
            .all(|c| c.is_ascii_graphic() && !matches!(c, '/' | '?' | '#' | '%'))
}

/// Fully-qualified installer URL for one version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstallerTarget(String);

impl InstallerTarget {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for InstallerTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves installer URLs from a fixed URL template.
#[derive(Debug, Clone)]
pub struct VersionResolver {
    base_host: String,
    tool: String,
    entry_resource: String,
}

impl VersionResolver {
    pub fn new(config: &InstallerConfig) -> Self {
        Self {
            base_host: config.base_host.trim_end_matches('/').to_string(),
            tool: config.tool.clone(),
            entry_resource: config.entry_resource.trim_start_matches('/').to_string(),
        }
    }

    /// Resolve the installer URL for the first entry of `versions`.
    pub fn resolve(&self, versions: &[String]) -> Result<InstallerTarget, NoVersionError> {
        versions
            .first()
            .map(|latest| self.target_for_version(latest))
            .ok_or(NoVersionError)
    }

    /// Resolve against a version list, which is never empty.
    pub fn target_for(&self, versions: &VersionList) -> InstallerTarget {
        self.target_for_version(versions.latest_version())
    }

    fn target_for_version(&self, version: &str) -> InstallerTarget {
        InstallerTarget(format!(
            "{}/x/{}@v{}/{}",
            self.base_host, self.tool, version, self.entry_resource
        ))
    }
}
