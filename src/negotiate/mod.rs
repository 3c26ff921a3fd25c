//! Content negotiation for the service root.
//!
//! # Data Flow
//! ```text
//! GET /
//!     → classifier.rs (Accept header → Browser | NonBrowser)
//!     → resolver.rs   (NonBrowser: version list → installer URL)
//!     → builder.rs    (307 redirect, or delegate to the renderer)
//! ```
//!
//! # Design Decisions
//! - Every function here is pure; the only shared state is the immutable
//!   version list, read without locks
//! - Rendering is a callback so this module never depends on page content

pub mod builder;
pub mod classifier;
pub mod resolver;

pub use builder::{build, Outcome, Redirect, REDIRECT_STATUS};
pub use classifier::{classify, classify_header, Decision};
pub use resolver::{InstallerTarget, NoVersionError, VersionList, VersionListError, VersionResolver};
