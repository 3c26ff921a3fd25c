//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, limits, request ID, response headers)
//! - Dispatch `GET /` through content negotiation
//! - Bind server to listener and drain on shutdown

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::GateConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::negotiate::{self, classify_header, Outcome, VersionList, VersionResolver};
use crate::observability::metrics;
use crate::render::{Renderer, RequestContext};
use crate::security::{body_limit_layer, security_headers_layer, vary_accept_layer};

/// Application state injected into handlers.
pub struct AppState<R> {
    pub versions: VersionList,
    pub resolver: Arc<VersionResolver>,
    pub renderer: Arc<R>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            versions: self.versions.clone(),
            resolver: self.resolver.clone(),
            renderer: self.renderer.clone(),
        }
    }
}

/// HTTP server for the landing gate.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new<R: Renderer>(config: GateConfig, versions: VersionList, renderer: R) -> Self {
        let state = AppState {
            versions,
            resolver: Arc::new(VersionResolver::new(&config.installer)),
            renderer: Arc::new(renderer),
        };

        Self {
            router: Self::build_router(&config, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router<R: Renderer>(config: &GateConfig, state: AppState<R>) -> Router {
        let mut router = Router::new()
            .route("/", get(root_handler::<R>).layer(vary_accept_layer()))
            .route("/health", get(health_handler::<R>))
            .with_state(state)
            .layer(body_limit_layer(&config.security))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

        if config.security.enable_headers {
            router = router.layer(security_headers_layer());
        }

        router
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// The fully layered router, for serving or driving directly in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Negotiated entry point.
/// Browsers get the rendered page, everything else the installer redirect.
async fn root_handler<R: Renderer>(
    State(state): State<AppState<R>>,
    request: Request<Body>,
) -> Response {
    let start_time = Instant::now();
    let request_id = request.request_id().map(str::to_string);

    let decision = classify_header(request.headers().get(header::ACCEPT));
    let target = state.resolver.target_for(&state.versions);

    tracing::debug!(
        request_id = request_id.as_deref().unwrap_or("unknown"),
        decision = %decision,
        "Classified request"
    );

    let renderer = state.renderer.clone();
    let outcome = negotiate::build(decision, &target, || {
        let (parts, _body) = request.into_parts();
        let ctx = RequestContext {
            uri: parts.uri,
            headers: parts.headers,
            request_id: request_id.clone(),
        };
        async move { renderer.render(ctx).await }
    });

    let response = match outcome {
        Outcome::Redirect(redirect) => {
            tracing::info!(
                request_id = request_id.as_deref().unwrap_or("unknown"),
                location = %redirect.location,
                "Redirecting to installer"
            );
            redirect.into_response()
        }
        Outcome::Delegate(page) => match page.await {
            Ok(page) => page,
            Err(e) => {
                tracing::error!(
                    request_id = request_id.as_deref().unwrap_or("unknown"),
                    error = %e,
                    "Renderer failed"
                );
                e.into_response()
            }
        },
    };

    metrics::record_request(decision, start_time);
    response
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub latest_version: String,
    pub installer: String,
}

async fn health_handler<R: Renderer>(State(state): State<AppState<R>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        latest_version: state.versions.latest_version().to_string(),
        installer: state.resolver.target_for(&state.versions).into_string(),
    })
}
