//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → limits.rs (check request body size)
//!     → handler
//!     → headers.rs (Vary, nosniff on the response)
//! ```

pub mod headers;
pub mod limits;

pub use headers::{security_headers_layer, vary_accept_layer};
pub use limits::body_limit_layer;
