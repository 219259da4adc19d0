use std::sync::Arc;

use axum::routing::post;
use axum::{Extension, Router};
use tower_http::catch_panic::CatchPanicLayer;

use crate::domain::Service;

use super::{error, handlers};

/// Mount the calculator endpoints on `router`.
///
/// Paths are relative; the host application decides the prefix they are
/// nested under.
pub fn register_routes(mut router: Router, service: Arc<Service>) -> Router {
    router = router
        .route("/calculate", post(handlers::calculate))
        .route("/advanced", post(handlers::advanced))
        .route("/binary/convert", post(handlers::convert_binary))
        .route("/reset", post(handlers::reset));

    router = router
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(Extension(service));

    router
}
