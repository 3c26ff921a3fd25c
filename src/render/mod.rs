//! Page rendering for browser clients.
//!
//! The negotiation core only knows the `Renderer` trait; page structure lives
//! entirely behind it. `landing.rs` holds the default renderer the binary
//! uses.

pub mod landing;

use std::future::Future;

use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub use landing::LandingPage;

/// Rendered output, passed back to the client as-is.
pub type RenderedPage = Response;

/// Request data a renderer may use.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub uri: Uri,
    pub headers: HeaderMap,
    pub request_id: Option<String>,
}

impl RequestContext {
    /// `scheme://host` the client used, when the request names a host.
    pub fn origin(&self) -> Option<String> {
        let host = self
            .uri
            .authority()
            .map(|a| a.as_str().to_string())
            .or_else(|| {
                self.headers
                    .get(header::HOST)
                    .and_then(|h| h.to_str().ok())
                    .map(str::to_string)
            })?;
        let scheme = self
            .headers
            .get("x-forwarded-proto")
            .and_then(|h| h.to_str().ok())
            .or_else(|| self.uri.scheme_str())
            .unwrap_or("http");
        Some(format!("{}://{}", scheme, host))
    }
}

/// Renderer failure. Surfaced to the client as a 500.
#[derive(Debug, Error)]
#[error("render failed: {0}")]
pub struct RenderError(pub String);

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
    }
}

/// Produces the page shown to browsers.
pub trait Renderer: Send + Sync + 'static {
    fn render(
        &self,
        ctx: RequestContext,
    ) -> impl Future<Output = Result<RenderedPage, RenderError>> + Send;
}
