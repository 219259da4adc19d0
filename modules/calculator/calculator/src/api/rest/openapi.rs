use utoipa::OpenApi;
use utoipa::openapi::server::Server;

use super::dto::{
    AdvancedCalculationRequest, BinaryConversionRequest, BinaryConversionResponse,
    CalculationRequest, CalculationResponse, ResetResponse,
};
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calculator API",
        description = "Arithmetic, advanced functions and binary conversion"
    ),
    paths(
        handlers::calculate,
        handlers::advanced,
        handlers::convert_binary,
        handlers::reset
    ),
    components(schemas(
        CalculationRequest,
        AdvancedCalculationRequest,
        BinaryConversionRequest,
        CalculationResponse,
        BinaryConversionResponse,
        ResetResponse
    )),
    tags((name = "calculator", description = "Calculator operations"))
)]
struct ApiDoc;

/// Build the `OpenAPI` document with `prefix` as the single server URL.
#[must_use]
pub fn openapi_document(prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let url = if prefix.is_empty() { "/" } else { prefix };
    doc.servers = Some(vec![Server::new(url)]);
    doc
}
