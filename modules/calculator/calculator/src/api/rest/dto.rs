//! REST DTOs for the calculator module
//!
//! These types are transport-specific (serde + utoipa for REST/OpenAPI).
//! Field names are camelCase on the wire.

use calculator_sdk::BinaryConversion;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to apply a binary arithmetic operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationRequest {
    pub first_operand: f64,
    pub second_operand: f64,
    /// `add`, `subtract`, `multiply`, `divide` or `+`, `-`, `*`, `/` (case-insensitive)
    pub operation: Option<String>,
}

/// Request to apply a single-operand function.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedCalculationRequest {
    pub operand: f64,
    /// `sqrt`, `log`/`log10`, `ln`/`loge`, `log2` (case-insensitive)
    pub function: Option<String>,
    /// Reserved; ignored by every current function.
    pub base: Option<f64>,
}

/// Request to convert between base-10 and base-2.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BinaryConversionRequest {
    /// `true` converts `value` to base-2, `false` converts `binaryValue` to base-10.
    pub to_binary: bool,
    pub value: f64,
    pub binary_value: Option<String>,
}

/// Outcome of an arithmetic or function evaluation.
///
/// Exactly one of `result` (on success) or `errorMessage` (on failure) is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl CalculationResponse {
    #[must_use]
    pub fn success(result: f64) -> Self {
        Self {
            result: Some(result),
            success: true,
            error_message: None,
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            result: None,
            success: false,
            error_message: Some(message.into()),
        }
    }
}

/// Successful binary conversion. Failures use the `CalculationResponse` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BinaryConversionResponse {
    pub success: bool,
    pub result: String,
    pub is_binary: bool,
}

impl From<BinaryConversion> for BinaryConversionResponse {
    fn from(conversion: BinaryConversion) -> Self {
        Self {
            success: true,
            result: conversion.result,
            is_binary: conversion.is_binary,
        }
    }
}

/// Acknowledgement for the stateless reset endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResetResponse {
    pub message: String,
    pub success: bool,
}
