//! Calculator Module
//!
//! Validated arithmetic and single-operand functions exposed over REST.
//!
//! ## Architecture
//!
//! - `domain::validation` rejects malformed input and resolves tokens to closed enums
//! - `domain::evaluator` computes results and applies post-condition guards
//! - `domain::binary` converts between base-10 numbers and base-2 text
//! - `Service` composes the three; REST handlers call it directly
//! - External consumers use `CalculatorLocalClient` through the SDK's
//!   `CalculatorClient` trait

// === PUBLIC EXPORTS ===
pub mod domain;
pub use domain::{CalculatorLocalClient, Service, ServiceConfig};

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
