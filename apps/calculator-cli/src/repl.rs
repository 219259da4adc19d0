//! Line-oriented driver for a calculator session
//!
//! Each input line is split on whitespace; every token is one key press or
//! command. Numbers may be typed as a single token (`12.5`).

use std::fmt::Write as _;
use std::sync::Arc;

use calculator_sdk::CalculatorClient;
use calculator_session::{LogBase, Mode, Operator, Session};

pub const HELP: &str = "\
Keys:     0-9 and . (e.g. 12.5), + - * /, =
Functions: sqrt, log, ln, log2
Commands: mode (toggle), dec | bin (select), c | clear, reset, help, q | quit
";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Number(String),
    Operator(Operator),
    Equals,
    SquareRoot,
    Logarithm(LogBase),
    ToggleMode,
    SelectMode(Mode),
    Clear,
    Reset,
    Help,
    Quit,
}

fn parse_token(token: &str) -> Option<Command> {
    let command = match token.to_lowercase().as_str() {
        "=" => Command::Equals,
        "sqrt" => Command::SquareRoot,
        "log" | "log10" => Command::Logarithm(LogBase::Ten),
        "ln" => Command::Logarithm(LogBase::E),
        "log2" => Command::Logarithm(LogBase::Two),
        "mode" => Command::ToggleMode,
        "dec" => Command::SelectMode(Mode::Decimal),
        "bin" => Command::SelectMode(Mode::Binary),
        "c" | "clear" => Command::Clear,
        "reset" => Command::Reset,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit() || c == '.') => {
            Command::Number(token.to_owned())
        }
        other => Command::Operator(other.parse().ok()?),
    };
    Some(command)
}

pub enum Outcome {
    /// Keep reading; print these lines first.
    Continue(Vec<String>),
    Quit,
}

pub struct Repl {
    session: Session,
    client: Arc<dyn CalculatorClient>,
}

impl Repl {
    pub fn new(session: Session, client: Arc<dyn CalculatorClient>) -> Self {
        Self { session, client }
    }

    /// One-line view of the session: mode, display, pending operator, message.
    pub fn status(&self) -> String {
        let mut line = format!("[{}] {}", self.session.mode(), self.session.display());
        if let Some(op) = self.session.operator() {
            let _ = write!(line, "  ({op})");
        }
        if !self.session.error().is_empty() {
            let _ = write!(line, "  ! {}", self.session.error());
        }
        line
    }

    pub async fn execute_line(&mut self, line: &str) -> Outcome {
        let mut output = Vec::new();
        for token in line.split_whitespace() {
            let Some(command) = parse_token(token) else {
                output.push(format!("Unknown input: {token} (type 'help')"));
                break;
            };
            tracing::debug!(?command, "executing");

            match command {
                Command::Number(text) => {
                    for c in text.chars() {
                        if c == '.' {
                            self.session.input_decimal();
                        } else {
                            self.session.input_digit(c);
                        }
                    }
                }
                Command::Operator(op) => self.session.perform_operation(op).await,
                Command::Equals => self.session.equals().await,
                Command::SquareRoot => self.session.square_root().await,
                Command::Logarithm(base) => self.session.logarithm(base).await,
                Command::ToggleMode => self.session.toggle_mode().await,
                Command::SelectMode(mode) => {
                    if self.session.mode() != mode {
                        self.session.toggle_mode().await;
                    }
                }
                Command::Clear => self.session.clear(),
                Command::Reset => {
                    match self.client.reset().await {
                        Ok(message) => output.push(message),
                        Err(e) => output.push(e.to_string()),
                    }
                    self.session.clear();
                }
                Command::Help => output.push(HELP.trim_end().to_owned()),
                Command::Quit => return Outcome::Quit,
            }
        }
        Outcome::Continue(output)
    }
}
