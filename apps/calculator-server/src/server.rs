//! HTTP surface: router assembly, middleware stack and serving.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::{DefaultBodyLimit, Request};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware::{Next, from_fn};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use calculator::Service;
use calculator::api::rest::{ApiError, openapi_document, register_routes};
use serde_json::{Value, json};
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;
use tracing::warn;

use crate::config::{AppConfig, ServerConfig};

/// Build a CORS layer from config.
pub fn build_cors_layer(cfg: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if cfg.cors_allowed_origins.iter().any(|o| o == "*") {
        warn!("CORS is configured with allowed_origins=['*']; any website may call the API");
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cfg
        .cors_allowed_origins
        .iter()
        .filter_map(|s| match HeaderValue::from_str(s) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %s, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}

fn apply_trace_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &axum::http::Response<axum::body::Body>,
                 latency: Duration,
                 span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                    tracing::debug!(parent: span, "request completed");
                },
            ),
    )
}

/// Rewrite plain error replies produced by the middleware stack (body limit,
/// timeout, unmatched routes) into the calculator failure shape. Replies that
/// are already JSON pass through untouched.
async fn failure_shape(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }

    let message = match status {
        StatusCode::PAYLOAD_TOO_LARGE => "Invalid request body: length limit exceeded",
        StatusCode::GATEWAY_TIMEOUT => "Request timed out",
        other => other.canonical_reason().unwrap_or("Request failed"),
    };
    tracing::debug!(
        status = status.as_u16(),
        reason = message,
        "Mapped plain error response"
    );

    let (mut parts, _) = response.into_parts();
    let mapped = ApiError::new(status, message).into_response();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.extend(mapped.headers().clone());
    Response::from_parts(parts, mapped.into_body())
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}

/// Assemble the full application router: calculator routes under the
/// configured prefix, `/health`, `/openapi.json`, and the middleware stack.
///
/// Layers are applied innermost first; requests pass
/// Trace → `FailureShape` → Timeout → `BodyLimit` → CORS → routes.
pub fn build_router(config: &AppConfig, service: Arc<Service>) -> Router {
    let server = &config.server;
    let prefix = server.normalized_prefix();

    let calculator = register_routes(Router::new(), service);
    let mut router = if prefix.is_empty() {
        Router::new().merge(calculator)
    } else {
        Router::new().nest(prefix, calculator)
    };

    let openapi: Value = serde_json::to_value(openapi_document(prefix)).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to render OpenAPI document");
        Value::Null
    });
    router = router
        .route("/health", get(health))
        .route(
            "/openapi.json",
            get(move || {
                let doc = openapi.clone();
                async move { Json(doc) }
            }),
        );

    if server.cors_enabled {
        router = router.layer(build_cors_layer(server));
    }

    router = router
        .layer(RequestBodyLimitLayer::new(server.body_limit_bytes))
        .layer(DefaultBodyLimit::max(server.body_limit_bytes));

    router = router.layer(TimeoutLayer::with_status_code(
        StatusCode::GATEWAY_TIMEOUT,
        server.request_timeout(),
    ));

    router = router.layer(from_fn(failure_shape));

    apply_trace_layer(router)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Bind, serve until a shutdown signal, then drain in-flight requests.
///
/// # Errors
/// Returns an error if the address is invalid, binding fails, or the server
/// stops with an I/O error.
pub async fn serve(config: &AppConfig) -> Result<()> {
    let addr = config.server.socket_addr()?;
    let service = Arc::new(Service::new(config.calculator));
    let router = build_router(config, service);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(
        addr = %listener.local_addr()?,
        prefix = config.server.normalized_prefix(),
        "HTTP server listening"
    );

    let shutdown = async {
        if let Err(e) = wait_for_shutdown().await {
            tracing::error!(error = %e, "Signal handling failed, shutting down");
        }
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Resolve on Ctrl+C or, on unix, SIGTERM.
async fn wait_for_shutdown() -> Result<()> {
    #[cfg(unix)]
    let terminate = async {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("failed to install SIGTERM handler")?;
        sigterm.recv().await;
        Ok::<_, anyhow::Error>("SIGTERM")
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<&'static str>>();

    let name = tokio::select! {
        result = signal::ctrl_c() => {
            result.context("failed to listen for Ctrl+C")?;
            "ctrl-c"
        }
        result = terminate => result?,
    };
    tracing::info!(signal = name, "Shutdown signal received, draining connections");
    Ok(())
}
