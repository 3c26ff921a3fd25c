//! Client classification from the `Accept` header.
//!
//! # Responsibilities
//! - Decide whether a request comes from an interactive browser
//! - Treat the header value as an opaque string (no media-type parsing)
//!
//! # Design Decisions
//! - Absent header defaults to `Browser` (the rendering path)
//! - Plain substring containment of `text/html`; quality values and wildcards
//!   are ignored, so `Accept: */*` is `NonBrowser`
//! - Non-UTF-8 header bytes are classified, never rejected

use axum::http::HeaderValue;

/// Media type whose presence marks a browser request.
pub const HTML_MEDIA_TYPE: &str = "text/html";

/// Which response path a request takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Interactive agent: render the landing page.
    Browser,
    /// Command-line fetch tool: redirect to the installer.
    NonBrowser,
}

impl Decision {
    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Browser => "browser",
            Decision::NonBrowser => "non_browser",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a request from its `Accept` header value.
pub fn classify(accept: Option<&str>) -> Decision {
    classify_bytes(accept.map(str::as_bytes))
}

/// Classify from the raw header, as read off an axum request.
pub fn classify_header(accept: Option<&HeaderValue>) -> Decision {
    classify_bytes(accept.map(HeaderValue::as_bytes))
}

fn classify_bytes(accept: Option<&[u8]>) -> Decision {
    match accept {
        None => Decision::Browser,
        Some(value) if contains(value, HTML_MEDIA_TYPE.as_bytes()) => Decision::Browser,
        Some(_) => Decision::NonBrowser,
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
