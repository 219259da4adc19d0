//! Arithmetic and function evaluation
//!
//! Operates on already-validated tokens. Each evaluation ends with a
//! post-condition guard on the computed value.

use calculator_sdk::{CalculatorError, DomainViolation, Function, Operation};

/// Apply a binary arithmetic operation.
///
/// # Errors
/// `DivisionByZero` when dividing by zero; `ResultTooLarge` when the result
/// overflows to infinity.
pub fn evaluate(operation: Operation, a: f64, b: f64) -> Result<f64, CalculatorError> {
    let result = match operation {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide => {
            if b == 0.0 {
                return Err(CalculatorError::DivisionByZero);
            }
            a / b
        }
    };

    if result.is_infinite() {
        return Err(CalculatorError::ResultTooLarge);
    }
    Ok(result)
}

/// Apply a single-operand function.
///
/// # Errors
/// `InvalidDomain` for operands outside the function's domain;
/// `ResultInvalid` when the result is infinite or NaN.
pub fn evaluate_function(function: Function, x: f64) -> Result<f64, CalculatorError> {
    let result = match function {
        Function::Sqrt => {
            if x < 0.0 {
                return Err(CalculatorError::InvalidDomain(
                    DomainViolation::NegativeSquareRoot,
                ));
            }
            x.sqrt()
        }
        Function::Log10 => positive(x)?.log10(),
        Function::Ln => positive(x)?.ln(),
        Function::Log2 => positive(x)?.log2(),
    };

    if !result.is_finite() {
        return Err(CalculatorError::ResultInvalid);
    }
    Ok(result)
}

fn positive(x: f64) -> Result<f64, CalculatorError> {
    if x <= 0.0 {
        return Err(CalculatorError::InvalidDomain(
            DomainViolation::NonPositiveLogarithm,
        ));
    }
    Ok(x)
}
