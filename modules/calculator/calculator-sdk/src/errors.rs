//! Error taxonomy shared by the calculator service and its clients.
//!
//! The `Display` text of every service-side variant is the exact message
//! returned on the wire in `errorMessage`.

use std::fmt;

use thiserror::Error;

/// Which named input was missing from a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredInput {
    Operation,
    Function,
}

impl fmt::Display for RequiredInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operation => f.write_str("Operation"),
            Self::Function => f.write_str("Function"),
        }
    }
}

/// Operand outside the mathematical domain of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainViolation {
    NegativeSquareRoot,
    NonPositiveLogarithm,
}

impl fmt::Display for DomainViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeSquareRoot => {
                f.write_str("Cannot calculate square root of negative number")
            }
            Self::NonPositiveLogarithm => f.write_str("Logarithm only works with positive numbers"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("{0} is required")]
    InputRequired(RequiredInput),

    /// An operand is NaN.
    #[error("Invalid number input")]
    InvalidNumber,

    /// An operand is infinite.
    #[error("Number is too large")]
    NumberTooLarge,

    #[error("Invalid operation. Supported operations: add, subtract, multiply, divide")]
    InvalidOperation,

    #[error("Invalid function. Supported functions: sqrt, log, ln, log2")]
    InvalidFunction,

    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("{0}")]
    InvalidDomain(DomainViolation),

    /// Arithmetic result overflowed to infinity.
    #[error("Result is too large")]
    ResultTooLarge,

    /// Function result is infinite or NaN.
    #[error("Result is invalid")]
    ResultInvalid,

    /// Value handed to the binary converter is negative or fractional.
    #[error("Only positive integers can be converted to binary")]
    NotConvertible,

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("An error occurred: {0}")]
    Unexpected(String),

    /// The service answered with a failure response.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The service could not be reached or answered with something unreadable.
    #[error("API connection error")]
    Transport(String),
}

impl CalculatorError {
    #[must_use]
    pub fn conversion(reason: impl fmt::Display) -> Self {
        Self::Conversion(reason.to_string())
    }

    #[must_use]
    pub fn unexpected(detail: impl fmt::Display) -> Self {
        Self::Unexpected(detail.to_string())
    }

    /// True for failures that are not the caller's fault.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        match self {
            Self::Unexpected(_) | Self::Transport(_) => true,
            Self::Rejected { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
