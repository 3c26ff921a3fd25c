//! Landing gate library.
//!
//! One URL for both discovery and installation: browsers get a landing page,
//! `curl <url> | sh` gets a 307 to the current installer script.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod negotiate;
pub mod observability;
pub mod render;
pub mod security;

pub use config::schema::GateConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use negotiate::{Decision, InstallerTarget, NoVersionError, VersionList, VersionResolver};
pub use render::{LandingPage, Renderer};
