//! Local client implementation of `CalculatorClient`
//!
//! Serves SDK consumers that run in the same process as the service.

use std::sync::Arc;

use async_trait::async_trait;
use calculator_sdk::{BinaryConversion, CalculatorClient, CalculatorError};

use super::service::Service;

/// Local client implementation that delegates to the module's Service.
#[derive(Clone)]
pub struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    /// Create a new local client wrapping the Service.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CalculatorClient for CalculatorLocalClient {
    async fn calculate(
        &self,
        first_operand: f64,
        second_operand: f64,
        operation: &str,
    ) -> Result<f64, CalculatorError> {
        self.service
            .calculate(first_operand, second_operand, Some(operation))
    }

    async fn advanced(&self, operand: f64, function: &str) -> Result<f64, CalculatorError> {
        self.service.advanced(operand, Some(function), None)
    }

    async fn to_binary(&self, value: f64) -> Result<BinaryConversion, CalculatorError> {
        self.service.to_binary(value)
    }

    async fn from_binary(&self, binary_value: &str) -> Result<BinaryConversion, CalculatorError> {
        self.service.from_binary(Some(binary_value))
    }

    async fn reset(&self) -> Result<String, CalculatorError> {
        Ok(self.service.reset().to_owned())
    }
}
