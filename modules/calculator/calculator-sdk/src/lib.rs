//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator service:
//! - Operation and function tokens (`Operation`, `Function`)
//! - Error taxonomy (`CalculatorError`)
//! - Client trait (`CalculatorClient`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClient, Operation};
//!
//! let result = client.calculate(6.0, 3.0, Operation::Divide.as_str()).await?;
//! assert_eq!(result, 2.0);
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

mod api;
mod errors;
mod models;

pub use api::CalculatorClient;
pub use errors::{CalculatorError, DomainViolation, RequiredInput};
pub use models::{BinaryConversion, Function, MAX_BINARY_VALUE, Operation, RESET_MESSAGE};
