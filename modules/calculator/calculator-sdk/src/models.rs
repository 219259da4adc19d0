//! Operation and function tokens accepted by the calculator.
//!
//! Tokens are matched case-insensitively. Each enum resolves the accepted
//! aliases once, so the evaluator only ever sees a closed set of variants.

use std::fmt;
use std::str::FromStr;

use crate::errors::CalculatorError;

/// Largest integer the binary converter accepts (2^53 - 1).
///
/// Every integer up to this bound is exactly representable as an `f64`, so
/// conversions in both directions round-trip through JSON numbers.
pub const MAX_BINARY_VALUE: u64 = (1 << 53) - 1;

/// Acknowledgement returned by the stateless reset endpoint.
pub const RESET_MESSAGE: &str = "Calculator reset successfully";

/// Binary arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Canonical wire token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Keypad symbol, also accepted as a token.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Resolve a lowercase token or symbol.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "add" | "+" => Some(Self::Add),
            "subtract" | "-" => Some(Self::Subtract),
            "multiply" | "*" => Some(Self::Multiply),
            "divide" | "/" => Some(Self::Divide),
            _ => None,
        }
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(&s.to_lowercase()).ok_or(CalculatorError::InvalidOperation)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-operand function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sqrt,
    Log10,
    Ln,
    Log2,
}

impl Function {
    pub const ALL: [Self; 4] = [Self::Sqrt, Self::Log10, Self::Ln, Self::Log2];

    /// Canonical wire token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Log10 => "log",
            Self::Ln => "ln",
            Self::Log2 => "log2",
        }
    }

    /// Resolve a lowercase token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "sqrt" => Some(Self::Sqrt),
            "log10" | "log" => Some(Self::Log10),
            "ln" | "loge" => Some(Self::Ln),
            "log2" => Some(Self::Log2),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_logarithm(self) -> bool {
        !matches!(self, Self::Sqrt)
    }
}

impl FromStr for Function {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(&s.to_lowercase()).ok_or(CalculatorError::InvalidFunction)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a binary conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryConversion {
    /// Converted text: base-2 digits when `is_binary`, base-10 digits otherwise.
    pub result: String,
    pub is_binary: bool,
}
