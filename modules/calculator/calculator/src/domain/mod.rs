//! Domain layer for the calculator module
//!
//! Pure validation and evaluation logic. Nothing here performs I/O or holds
//! mutable state.

pub mod binary;
pub mod evaluator;
pub mod local_client;
pub mod service;
pub mod validation;

pub use local_client::CalculatorLocalClient;
pub use service::{Service, ServiceConfig};
