use std::fmt;
use std::str::FromStr;

use calculator_sdk::{CalculatorError, Function, Operation};

/// Input mode of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Decimal,
    Binary,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Decimal => "DEC",
            Mode::Binary => "BIN",
        })
    }
}

/// Operator key: one of the four arithmetic operations or `=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Apply(Operation),
    Equals,
}

impl From<Operation> for Operator {
    fn from(op: Operation) -> Self {
        Operator::Apply(op)
    }
}

impl FromStr for Operator {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "=" {
            return Ok(Operator::Equals);
        }
        s.parse::<Operation>().map(Operator::Apply)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Apply(op) => f.write_str(op.symbol()),
            Operator::Equals => f.write_str("="),
        }
    }
}

/// Logarithm base offered by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogBase {
    Ten,
    E,
    Two,
}

impl LogBase {
    #[must_use]
    pub fn function(self) -> Function {
        match self {
            LogBase::Ten => Function::Log10,
            LogBase::E => Function::Ln,
            LogBase::Two => Function::Log2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_parsing() {
        assert_eq!("=".parse::<Operator>(), Ok(Operator::Equals));
        assert_eq!(
            "+".parse::<Operator>(),
            Ok(Operator::Apply(Operation::Add))
        );
        assert_eq!(
            "Divide".parse::<Operator>(),
            Ok(Operator::Apply(Operation::Divide))
        );
        assert_eq!(
            "%".parse::<Operator>(),
            Err(CalculatorError::InvalidOperation)
        );
    }

    #[test]
    fn operator_display_uses_symbols() {
        assert_eq!(Operator::from(Operation::Multiply).to_string(), "*");
        assert_eq!(Operator::Equals.to_string(), "=");
    }

    #[test]
    fn log_bases_map_to_functions() {
        assert_eq!(LogBase::Ten.function().as_str(), "log");
        assert_eq!(LogBase::E.function().as_str(), "ln");
        assert_eq!(LogBase::Two.function().as_str(), "log2");
    }
}
