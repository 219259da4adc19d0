//! REST handlers for the calculator module

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};

use crate::domain::Service;

use super::dto::{
    AdvancedCalculationRequest, BinaryConversionRequest, BinaryConversionResponse,
    CalculationRequest, CalculationResponse, ResetResponse,
};
use super::error::ApiError;

/// Handler for POST /calculate
#[utoipa::path(
    post,
    path = "/calculate",
    tag = "calculator",
    request_body = CalculationRequest,
    responses(
        (status = 200, description = "Result of the operation", body = CalculationResponse),
        (status = 400, description = "Invalid input or arithmetic error", body = CalculationResponse),
        (status = 500, description = "Unexpected failure", body = CalculationResponse),
    )
)]
pub async fn calculate(
    Extension(service): Extension<Arc<Service>>,
    body: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let Json(req) = body?;
    let result = service.calculate(
        req.first_operand,
        req.second_operand,
        req.operation.as_deref(),
    )?;
    Ok(Json(CalculationResponse::success(result)))
}

/// Handler for POST /advanced
#[utoipa::path(
    post,
    path = "/advanced",
    tag = "calculator",
    request_body = AdvancedCalculationRequest,
    responses(
        (status = 200, description = "Result of the function", body = CalculationResponse),
        (status = 400, description = "Invalid input or domain error", body = CalculationResponse),
        (status = 500, description = "Unexpected failure", body = CalculationResponse),
    )
)]
pub async fn advanced(
    Extension(service): Extension<Arc<Service>>,
    body: Result<Json<AdvancedCalculationRequest>, JsonRejection>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let Json(req) = body?;
    let result = service.advanced(req.operand, req.function.as_deref(), req.base)?;
    Ok(Json(CalculationResponse::success(result)))
}

/// Handler for POST /binary/convert
#[utoipa::path(
    post,
    path = "/binary/convert",
    tag = "calculator",
    request_body = BinaryConversionRequest,
    responses(
        (status = 200, description = "Converted value", body = BinaryConversionResponse),
        (status = 400, description = "Value cannot be converted", body = CalculationResponse),
    )
)]
pub async fn convert_binary(
    Extension(service): Extension<Arc<Service>>,
    body: Result<Json<BinaryConversionRequest>, JsonRejection>,
) -> Result<Json<BinaryConversionResponse>, ApiError> {
    let Json(req) = body?;
    let conversion = if req.to_binary {
        service.to_binary(req.value)?
    } else {
        service.from_binary(req.binary_value.as_deref())?
    };
    Ok(Json(conversion.into()))
}

/// Handler for POST /reset
#[utoipa::path(
    post,
    path = "/reset",
    tag = "calculator",
    responses(
        (status = 200, description = "Reset acknowledged", body = ResetResponse),
    )
)]
pub async fn reset(Extension(service): Extension<Arc<Service>>) -> Json<ResetResponse> {
    Json(ResetResponse {
        message: service.reset().to_owned(),
        success: true,
    })
}
