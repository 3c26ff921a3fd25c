//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use landing_gate::config::GateConfig;
use landing_gate::http::HttpServer;
use landing_gate::lifecycle::Shutdown;
use landing_gate::negotiate::VersionList;
use landing_gate::render::{RenderError, RenderedPage, Renderer, RequestContext};

pub const PAGE_BODY: &str = "<html>landing</html>";

/// Renderer that returns a fixed page and counts calls.
#[derive(Clone, Default)]
pub struct FixedPage {
    pub calls: Arc<AtomicUsize>,
}

impl FixedPage {
    #[allow(dead_code)]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Renderer for FixedPage {
    async fn render(&self, _ctx: RequestContext) -> Result<RenderedPage, RenderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok((
            StatusCode::OK,
            [("content-type", "text/html; charset=utf-8"), ("x-rendered-by", "fixed")],
            PAGE_BODY,
        )
            .into_response())
    }
}

/// Renderer that always fails.
#[allow(dead_code)]
pub struct FailingPage;

impl Renderer for FailingPage {
    async fn render(&self, _ctx: RequestContext) -> Result<RenderedPage, RenderError> {
        Err(RenderError("template missing".into()))
    }
}

pub fn versions(v: &[&str]) -> VersionList {
    VersionList::new(v.iter().map(|s| s.to_string()).collect()).unwrap()
}

pub fn test_config() -> GateConfig {
    let mut config = GateConfig::default();
    config.installer.base_host = "https://deno.land".into();
    config.installer.tool = "fresh".into();
    config.installer.entry_resource = "init.ts".into();
    config
}

/// Start the gate on an ephemeral port; returns its address.
#[allow(dead_code)]
pub async fn start_gate<R: Renderer>(
    versions: VersionList,
    renderer: R,
    shutdown: &Shutdown,
) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(test_config(), versions, renderer);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;
    addr
}

/// HTTP client that reports redirects instead of following them.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
