use std::any::Any;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use calculator_sdk::CalculatorError;
use http::StatusCode;

use super::dto::CalculationResponse;

/// Failure answered by every calculator endpoint as
/// `{ "success": false, "errorMessage": ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Map a domain error to its HTTP status: unexpected failures are 500,
/// everything the caller can fix is 400.
impl From<CalculatorError> for ApiError {
    fn from(e: CalculatorError) -> Self {
        let status = if e.is_internal() {
            tracing::error!(error = %e, "Unexpected calculator failure");
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::BAD_REQUEST
        };
        Self::new(status, e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected request body");
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("Invalid request body: {}", rejection.body_text()),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(CalculationResponse::failure(self.message))).into_response()
    }
}

/// Turn a handler panic into a 500 failure response so the process keeps serving.
#[allow(clippy::needless_pass_by_value)] // CatchPanicLayer hands over the boxed payload
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "unknown panic".to_owned()
    };

    tracing::error!(panic = %detail, "Handler panicked");
    ApiError::from(CalculatorError::unexpected(detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use calculator_sdk::DomainViolation;

    #[test]
    fn domain_errors_are_bad_requests() {
        for e in [
            CalculatorError::DivisionByZero,
            CalculatorError::InvalidOperation,
            CalculatorError::InvalidDomain(DomainViolation::NegativeSquareRoot),
            CalculatorError::ResultTooLarge,
            CalculatorError::conversion("invalid digit found in string"),
        ] {
            let message = e.to_string();
            let api = ApiError::from(e);
            assert_eq!(api.status, StatusCode::BAD_REQUEST);
            assert_eq!(api.message, message);
        }
    }

    #[test]
    fn unexpected_errors_are_internal() {
        let api = ApiError::from(CalculatorError::unexpected("boom"));
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, "An error occurred: boom");
    }

    #[test]
    fn panic_payloads_are_wrapped() {
        let resp = panic_response(Box::new("kaput"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = panic_response(Box::new(String::from("kaput")));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = panic_response(Box::new(42_u8));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
