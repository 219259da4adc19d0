//! Client trait for the calculator service

use async_trait::async_trait;

use crate::errors::CalculatorError;
use crate::models::BinaryConversion;

/// Calculator API trait
///
/// Mirrors the wire contract: operation and function names are passed as raw
/// strings and resolved by the service, so every implementation reports the
/// same validation errors.
///
/// Implemented in-process by `calculator::CalculatorLocalClient` and over HTTP
/// by `calculator_session::CalculatorHttpClient`.
#[async_trait]
pub trait CalculatorClient: Send + Sync {
    /// Apply a binary arithmetic operation to two operands.
    async fn calculate(
        &self,
        first_operand: f64,
        second_operand: f64,
        operation: &str,
    ) -> Result<f64, CalculatorError>;

    /// Apply a single-operand function (`sqrt`, `log`, `ln`, `log2`).
    async fn advanced(&self, operand: f64, function: &str) -> Result<f64, CalculatorError>;

    /// Render a non-negative integer as base-2 text.
    async fn to_binary(&self, value: f64) -> Result<BinaryConversion, CalculatorError>;

    /// Parse base-2 text and render it as a base-10 string.
    async fn from_binary(&self, binary_value: &str) -> Result<BinaryConversion, CalculatorError>;

    /// Stateless reset acknowledgement.
    async fn reset(&self) -> Result<String, CalculatorError>;
}
