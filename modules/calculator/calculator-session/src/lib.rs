//! Calculator Session
//!
//! Client-side calculator state: the display, a pending operator, the first
//! operand and the input mode. Every arithmetic step is delegated to a
//! [`CalculatorClient`](calculator_sdk::CalculatorClient), usually the
//! [`CalculatorHttpClient`] talking to a running calculator server.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

mod config;
mod http_client;
mod model;
mod session;

pub use config::{DEFAULT_BASE_URL, HttpClientConfig};
pub use http_client::CalculatorHttpClient;
pub use model::{LogBase, Mode, Operator};
pub use session::{INVALID_INPUT, NON_INTEGER_RESULT, Session};
