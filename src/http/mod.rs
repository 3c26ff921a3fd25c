//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID assigned and echoed)
//!     → negotiate (classify, resolve, build)
//!     → redirect response, or renderer output unchanged
//!     → Send to client
//! ```

pub mod request;
pub mod server;

pub use request::{RequestId, RequestIdExt, X_REQUEST_ID};
pub use server::{AppState, HealthStatus, HttpServer};
