//! Default landing page.
//!
//! A single static document built from `PageConfig` and
//! `templates/landing.html`. It shows the one-line install command pointing
//! back at this service.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::config::PageConfig;
use crate::render::{RenderError, RenderedPage, Renderer, RequestContext};

/// Landing page template. Values are HTML-escaped by askama.
#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub title: String,
    pub description: String,
    pub announcement: Option<String>,
    pub origin: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LandingPage {
    page: PageConfig,
}

impl LandingPage {
    pub fn new(page: PageConfig) -> Self {
        Self { page }
    }

    fn template(&self, origin: Option<String>) -> LandingTemplate {
        LandingTemplate {
            title: self.page.title.clone(),
            description: self.page.description.clone(),
            announcement: self.page.announcement.clone(),
            origin,
        }
    }
}

impl Renderer for LandingPage {
    async fn render(&self, ctx: RequestContext) -> Result<RenderedPage, RenderError> {
        Ok(self.template(ctx.origin()).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderMap, StatusCode};

    #[test]
    fn test_template_escapes_and_includes_install_command() {
        let page = LandingPage::new(PageConfig {
            title: "Tool <beta>".into(),
            description: "fast & \"small\"".into(),
            announcement: Some("v1 released".into()),
        });
        let html = page
            .template(Some("https://get.example.com".into()))
            .render()
            .unwrap();

        assert!(
            html.contains("<title>Tool &#60;beta&#62;</title>")
                || html.contains("<title>Tool &lt;beta&gt;</title>")
        );
        assert!(!html.contains("<beta>"));
        assert!(!html.contains("\"small\""));
        assert!(html.contains("curl -fsSL https://get.example.com | sh"));
        assert!(html.contains("v1 released"));
    }

    #[test]
    fn test_template_without_origin_or_announcement() {
        let html = LandingPage::new(PageConfig::default())
            .template(None)
            .render()
            .unwrap();

        assert!(!html.contains("Getting Started"));
        assert!(!html.contains("announcement"));
    }

    #[tokio::test]
    async fn test_render_is_html() {
        let page = LandingPage::new(PageConfig::default());
        let ctx = RequestContext {
            uri: "/".parse().unwrap(),
            headers: HeaderMap::new(),
            request_id: None,
        };
        let response = page.render(ctx).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }
}
