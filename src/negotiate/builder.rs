//! Response selection for a classified request.
//!
//! # Design Decisions
//! - 307 keeps the request method on the redirected request
//! - The render callback runs only on the browser path, and its result is
//!   returned untouched

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::negotiate::classifier::Decision;
use crate::negotiate::resolver::InstallerTarget;

/// Status used for installer redirects.
pub const REDIRECT_STATUS: StatusCode = StatusCode::TEMPORARY_REDIRECT;

/// Redirect to the installer for non-browser clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub location: InstallerTarget,
    pub status: StatusCode,
    pub body: String,
}

impl Redirect {
    pub fn to(target: &InstallerTarget) -> Self {
        Self {
            location: target.clone(),
            status: REDIRECT_STATUS,
            body: format!("Redirecting to {}", target),
        }
    }
}

impl IntoResponse for Redirect {
    fn into_response(self) -> Response {
        let location = match HeaderValue::from_str(self.location.as_str()) {
            Ok(v) => v,
            Err(e) => {
                // Base host and versions are checked at startup; only a bad tool or
                // entry resource character can land here.
                tracing::error!(location = %self.location, error = %e, "Invalid redirect location");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };

        (
            self.status,
            [
                (header::LOCATION, location),
                (
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("text/plain; charset=utf-8"),
                ),
            ],
            self.body,
        )
            .into_response()
    }
}

/// What to send back for one request.
#[derive(Debug)]
pub enum Outcome<P> {
    Redirect(Redirect),
    /// Whatever the renderer produced.
    Delegate(P),
}

/// Pick the response path for `decision`.
pub fn build<P, F>(decision: Decision, target: &InstallerTarget, render: F) -> Outcome<P>
where
    F: FnOnce() -> P,
{
    match decision {
        Decision::NonBrowser => Outcome::Redirect(Redirect::to(target)),
        Decision::Browser => Outcome::Delegate(render()),
    }
}
