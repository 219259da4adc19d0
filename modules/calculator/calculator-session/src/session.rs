//! Calculator session state machine
//!
//! A session walks through three phases (entering the first operand, an
//! operator pending, entering the second operand) in either decimal or
//! binary mode. Each user action mutates the state in place; actions that
//! need arithmetic make exactly one call on the client and fold the answer
//! back into the display.

use std::sync::Arc;

use calculator_sdk::{CalculatorClient, CalculatorError, Function, MAX_BINARY_VALUE};
use tracing::debug;

use crate::model::{LogBase, Mode, Operator};

/// Shown when the display cannot be read as a number in the current mode.
pub const INVALID_INPUT: &str = "Invalid input";

/// Shown when a binary-mode result has to be displayed in decimal.
pub const NON_INTEGER_RESULT: &str = "Result is not an integer, switching to decimal mode";

const BINARY_DIGITS_ONLY: &str = "Binary mode only accepts 0 and 1";
const NO_BINARY_DECIMALS: &str = "Decimals not allowed in binary mode";

/// Client-side calculator state.
pub struct Session {
    client: Arc<dyn CalculatorClient>,
    display: String,
    first_operand: Option<f64>,
    operator: Option<Operator>,
    waiting_for_second_operand: bool,
    mode: Mode,
    error: String,
}

impl Session {
    #[must_use]
    pub fn new(client: Arc<dyn CalculatorClient>) -> Self {
        Self {
            client,
            display: "0".to_owned(),
            first_operand: None,
            operator: None,
            waiting_for_second_operand: false,
            mode: Mode::Decimal,
            error: String::new(),
        }
    }

    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[must_use]
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    #[must_use]
    pub fn is_waiting_for_second_operand(&self) -> bool {
        self.waiting_for_second_operand
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Last error or informational message; empty when there is none.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Type one digit. Binary mode only accepts `0` and `1`.
    pub fn input_digit(&mut self, digit: char) {
        self.error.clear();

        if !digit.is_ascii_digit() {
            INVALID_INPUT.clone_into(&mut self.error);
            return;
        }
        if self.mode == Mode::Binary && !matches!(digit, '0' | '1') {
            BINARY_DIGITS_ONLY.clone_into(&mut self.error);
            return;
        }

        if self.waiting_for_second_operand {
            self.display = digit.to_string();
            self.waiting_for_second_operand = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    /// Type a decimal point. Rejected in binary mode.
    pub fn input_decimal(&mut self) {
        if self.mode == Mode::Binary {
            NO_BINARY_DECIMALS.clone_into(&mut self.error);
            return;
        }

        self.error.clear();
        if self.waiting_for_second_operand {
            "0.".clone_into(&mut self.display);
            self.waiting_for_second_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Switch between decimal and binary, converting the display through the
    /// client. On failure the mode is left unchanged.
    pub async fn toggle_mode(&mut self) {
        let outcome = match self.mode {
            Mode::Decimal => {
                let Some(value) = self
                    .display
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0)
                else {
                    self.error = CalculatorError::NotConvertible.to_string();
                    return;
                };
                self.client.to_binary(value).await
            }
            Mode::Binary => self.client.from_binary(&self.display).await,
        };

        match outcome {
            Ok(conversion) => {
                self.display = conversion.result;
                self.mode = if conversion.is_binary {
                    Mode::Binary
                } else {
                    Mode::Decimal
                };
                self.error.clear();
            }
            Err(e) => self.report(&e),
        }
    }

    /// Press an operator key (`+ - * /` or `=`).
    ///
    /// The first press captures the display as the first operand. Later
    /// presses evaluate the pending operation and chain its result. A server
    /// rejection resets the session to a fresh first operand; a transport
    /// failure leaves the state as it was.
    pub async fn perform_operation(&mut self, next: Operator) {
        let Some(input) = self.read_display() else {
            INVALID_INPUT.clone_into(&mut self.error);
            return;
        };

        match (self.first_operand, self.operator) {
            (Some(first), Some(Operator::Apply(operation))) => {
                match self
                    .client
                    .calculate(first, input, operation.as_str())
                    .await
                {
                    Ok(result) => {
                        self.show_result(result);
                        self.first_operand = Some(result);
                    }
                    Err(e @ CalculatorError::Transport(_)) => {
                        self.report(&e);
                        return;
                    }
                    Err(e) => {
                        self.report(&e);
                        "0".clone_into(&mut self.display);
                        self.first_operand = None;
                        self.operator = None;
                        self.waiting_for_second_operand = false;
                        return;
                    }
                }
            }
            // Nothing pending (fresh session or after `=`): the display starts a new chain.
            _ => self.first_operand = Some(input),
        }

        self.waiting_for_second_operand = true;
        self.operator = Some(next);
    }

    /// Evaluate the pending operation, if any, and clear the operator.
    pub async fn equals(&mut self) {
        if self.operator.is_some() && self.first_operand.is_some() {
            self.perform_operation(Operator::Equals).await;
            self.operator = None;
        }
    }

    /// Replace the display with its square root.
    pub async fn square_root(&mut self) {
        if let Some(result) = self.apply(Function::Sqrt).await {
            self.show_result(result);
        }
    }

    /// Replace the display with its logarithm. The result is always shown in
    /// decimal mode.
    pub async fn logarithm(&mut self, base: LogBase) {
        if let Some(result) = self.apply(base.function()).await {
            self.mode = Mode::Decimal;
            self.display = format_decimal(result);
            self.error.clear();
        }
    }

    /// Return every field to its initial value.
    pub fn clear(&mut self) {
        "0".clone_into(&mut self.display);
        self.first_operand = None;
        self.operator = None;
        self.waiting_for_second_operand = false;
        self.mode = Mode::Decimal;
        self.error.clear();
    }

    async fn apply(&mut self, function: Function) -> Option<f64> {
        let Some(input) = self.read_display() else {
            INVALID_INPUT.clone_into(&mut self.error);
            return None;
        };

        match self.client.advanced(input, function.as_str()).await {
            Ok(result) => Some(result),
            Err(e) => {
                self.report(&e);
                None
            }
        }
    }

    fn read_display(&self) -> Option<f64> {
        match self.mode {
            Mode::Binary => {
                let integer = i64::from_str_radix(&self.display, 2).ok()?;
                #[allow(clippy::cast_precision_loss)]
                let value = integer as f64;
                Some(value)
            }
            Mode::Decimal => self
                .display
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite()),
        }
    }

    fn show_result(&mut self, value: f64) {
        self.error.clear();
        if self.mode == Mode::Binary {
            if let Some(text) = format_binary(value) {
                self.display = text;
                return;
            }
            self.mode = Mode::Decimal;
            NON_INTEGER_RESULT.clone_into(&mut self.error);
        }
        self.display = format_decimal(value);
    }

    fn report(&mut self, e: &CalculatorError) {
        debug!(error = ?e, "calculator call failed");
        self.error = e.to_string();
    }
}

/// Integral values print without a fraction; everything else uses the
/// shortest text that parses back to the same value.
fn format_decimal(value: f64) -> String {
    if value == 0.0 {
        // folds -0 into 0
        return "0".to_owned();
    }
    value.to_string()
}

/// Base-2 text for integral values within the exactly representable range.
fn format_binary(value: f64) -> Option<String> {
    #[allow(clippy::cast_precision_loss)]
    let limit = MAX_BINARY_VALUE as f64;
    if value.fract() != 0.0 || value.abs() > limit {
        return None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let magnitude = value.abs() as u64;
    Some(if value < 0.0 {
        format!("-{magnitude:b}")
    } else {
        format!("{magnitude:b}")
    })
}
