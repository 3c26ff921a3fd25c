//! Response headers added around the handlers.
//!
//! # Responsibilities
//! - `Vary: Accept` on the negotiated root, so caches keep the page and the
//!   redirect apart
//! - `X-Content-Type-Options: nosniff` when security headers are enabled
//!
//! # Design Decisions
//! - Headers are set by layers; rendered pages pass through the handler
//!   unmodified
//! - Existing values from the renderer are never overwritten

use axum::http::{header, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

/// Marks the response as varying on `Accept`.
pub fn vary_accept_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::appending(header::VARY, HeaderValue::from_static("accept"))
}

/// Stops browsers from sniffing the redirect body as something else.
pub fn security_headers_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    )
}
