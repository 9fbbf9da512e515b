//! HTTP host: router assembly, middleware and serving.

use std::time::Duration;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use calculator::CalculatorModule;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Build the full application router.
#[must_use]
pub fn build_router(config: &ServerConfig, module: &CalculatorModule) -> Router {
    let router = Router::new().route("/healthz", get(healthz));
    let router = module.register_rest(router);
    apply_middleware_stack(router, config)
}

async fn healthz() -> &'static str {
    "ok"
}

// Layers run outermost first:
//   1. SetRequestId        - generate x-request-id when absent
//   2. PropagateRequestId  - echo x-request-id on responses
//   3. Trace               - request span
//   4. Timeout
//   5. BodyLimit
//   6. CORS (optional)
fn apply_middleware_stack(mut router: Router, config: &ServerConfig) -> Router {
    if config.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    router = router
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes));

    router = router.layer(TimeoutLayer::with_status_code(
        StatusCode::GATEWAY_TIMEOUT,
        Duration::from_secs(config.request_timeout_secs),
    ));

    router = router.layer(TraceLayer::new_for_http().make_span_with(
        |req: &Request<axum::body::Body>| {
            let request_id = req
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("n/a");

            tracing::info_span!(
                "http_request",
                method = %req.method(),
                uri = %req.uri().path(),
                version = ?req.version(),
                request_id = %request_id,
            )
        },
    ));

    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Bind the configured listen address.
///
/// # Errors
/// Returns an error if the address is invalid or cannot be bound.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("HTTP server bound on {addr}");
    Ok(listener)
}

/// Serve `router` until `cancel` fires, then drain in-flight requests.
///
/// # Errors
/// Returns an error if the server fails while accepting connections.
pub async fn serve(listener: TcpListener, router: Router, cancel: CancellationToken) -> Result<()> {
    let shutdown = async move {
        cancel.cancelled().await;
        tracing::info!("HTTP server shutting down gracefully (cancellation)");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
