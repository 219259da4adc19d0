//! Domain service for calculator
//!
//! Composes validation, evaluation, and binary conversion. Stateless apart
//! from its configuration, so a single instance is shared across requests.

use calculator_sdk::{BinaryConversion, CalculatorError, MAX_BINARY_VALUE, RESET_MESSAGE};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::{binary, evaluator, validation};

/// Service configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Largest integer accepted by the binary converter. Capped at 2^53 - 1.
    pub max_binary_value: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_binary_value: MAX_BINARY_VALUE,
        }
    }
}

/// Domain service that performs calculator operations.
#[derive(Debug, Clone)]
pub struct Service {
    config: ServiceConfig,
}

impl Default for Service {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}

impl Service {
    #[must_use]
    pub fn new(mut config: ServiceConfig) -> Self {
        if config.max_binary_value > MAX_BINARY_VALUE {
            warn!(
                configured = config.max_binary_value,
                cap = MAX_BINARY_VALUE,
                "max_binary_value exceeds exact f64 range, capping"
            );
            config.max_binary_value = MAX_BINARY_VALUE;
        }
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Validate and evaluate a binary arithmetic request.
    ///
    /// # Errors
    /// Any validation or evaluation failure from the calculator error taxonomy.
    #[instrument(skip(self), level = "debug")]
    pub fn calculate(
        &self,
        first_operand: f64,
        second_operand: f64,
        operation: Option<&str>,
    ) -> Result<f64, CalculatorError> {
        let request = validation::validate_calculation(first_operand, second_operand, operation)
            .inspect_err(|e| debug!(error = %e, "calculation rejected"))?;

        let result = evaluator::evaluate(
            request.operation,
            request.first_operand,
            request.second_operand,
        )
        .inspect_err(|e| debug!(error = %e, "calculation failed"))?;

        debug!(operation = %request.operation, result, "calculation completed");
        Ok(result)
    }

    /// Validate and evaluate a single-operand function request.
    ///
    /// `base` is accepted for wire compatibility; no current function uses it.
    ///
    /// # Errors
    /// Any validation or evaluation failure from the calculator error taxonomy.
    #[instrument(skip(self), level = "debug")]
    pub fn advanced(
        &self,
        operand: f64,
        function: Option<&str>,
        base: Option<f64>,
    ) -> Result<f64, CalculatorError> {
        let request = validation::validate_function_call(operand, function)
            .inspect_err(|e| debug!(error = %e, "function call rejected"))?;

        if base.is_some() {
            debug!(function = %request.function, "ignoring base for function");
        }

        let result = evaluator::evaluate_function(request.function, request.operand)
            .inspect_err(|e| debug!(error = %e, "function call failed"))?;

        debug!(function = %request.function, result, "function call completed");
        Ok(result)
    }

    /// Convert a non-negative integer to base-2 text.
    ///
    /// # Errors
    /// `NotConvertible` or `Conversion`.
    #[instrument(skip(self), level = "debug")]
    pub fn to_binary(&self, value: f64) -> Result<BinaryConversion, CalculatorError> {
        binary::to_binary(value, self.config.max_binary_value)
            .inspect_err(|e| debug!(error = %e, "binary conversion rejected"))
    }

    /// Convert base-2 text to a base-10 string.
    ///
    /// A missing value is treated as empty text.
    ///
    /// # Errors
    /// `Conversion`.
    #[instrument(skip(self), level = "debug")]
    pub fn from_binary(
        &self,
        binary_value: Option<&str>,
    ) -> Result<BinaryConversion, CalculatorError> {
        binary::from_binary(binary_value.unwrap_or_default(), self.config.max_binary_value)
            .inspect_err(|e| debug!(error = %e, "binary conversion rejected"))
    }

    /// Reset acknowledgement. There is no server-side state to clear.
    #[must_use]
    pub fn reset(&self) -> &'static str {
        debug!("reset requested");
        RESET_MESSAGE
    }
}
