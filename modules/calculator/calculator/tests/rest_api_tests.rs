#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

//! End-to-end tests for the calculator REST surface, driven through the
//! router without binding a socket.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use calculator::api::rest::register_routes;
use calculator::{Service, ServiceConfig};
use serde_json::{Value, json};
use tower::ServiceExt as _;

fn app() -> Router {
    register_routes(Router::new(), Arc::new(Service::default()))
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn expect_failure(uri: &str, body: Value, message: &str) {
    let (status, json) = post(app(), uri, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{json}");
    assert_eq!(json["success"], false);
    assert_eq!(json["errorMessage"], message);
    assert!(json.get("result").is_none());
}

#[tokio::test]
async fn divide_returns_quotient() {
    let (status, json) = post(
        app(),
        "/calculate",
        json!({"firstOperand": 6, "secondOperand": 3, "operation": "divide"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["result"].as_f64(), Some(2.0));
    assert!(json.get("errorMessage").is_none());
}

#[tokio::test]
async fn operation_symbols_and_case_are_accepted() {
    for (op, expected) in [("+", 7.0), ("ADD", 7.0), ("-", 3.0), ("Multiply", 10.0), ("*", 10.0)] {
        let (status, json) = post(
            app(),
            "/calculate",
            json!({"firstOperand": 5, "secondOperand": 2, "operation": op}),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{op}");
        assert_eq!(json["result"].as_f64(), Some(expected), "{op}");
    }
}

#[tokio::test]
async fn divide_by_zero_is_rejected() {
    expect_failure(
        "/calculate",
        json!({"firstOperand": 5, "secondOperand": 0, "operation": "/"}),
        "Cannot divide by zero",
    )
    .await;
}

#[tokio::test]
async fn unknown_operation_is_rejected() {
    expect_failure(
        "/calculate",
        json!({"firstOperand": 5, "secondOperand": 1, "operation": "pow"}),
        "Invalid operation. Supported operations: add, subtract, multiply, divide",
    )
    .await;
}

#[tokio::test]
async fn overflowing_product_is_rejected() {
    expect_failure(
        "/calculate",
        json!({"firstOperand": 1e308, "secondOperand": 10, "operation": "multiply"}),
        "Result is too large",
    )
    .await;
}

#[tokio::test]
async fn square_root_of_sixteen() {
    let (status, json) = post(app(), "/advanced", json!({"operand": 16, "function": "sqrt"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"].as_f64(), Some(4.0));
}

#[tokio::test]
async fn logarithm_of_negative_is_rejected() {
    expect_failure(
        "/advanced",
        json!({"operand": -1, "function": "log"}),
        "Logarithm only works with positive numbers",
    )
    .await;
}

#[tokio::test]
async fn square_root_of_negative_is_rejected() {
    expect_failure(
        "/advanced",
        json!({"operand": -4, "function": "sqrt"}),
        "Cannot calculate square root of negative number",
    )
    .await;
}

#[tokio::test]
async fn missing_function_is_rejected() {
    expect_failure("/advanced", json!({"operand": 4}), "Function is required").await;
}

#[tokio::test]
async fn base_is_ignored() {
    let (status, json) = post(
        app(),
        "/advanced",
        json!({"operand": 8, "function": "log2", "base": 10}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"].as_f64(), Some(3.0));
}

#[tokio::test]
async fn decimal_to_binary() {
    let (status, json) = post(app(), "/binary/convert", json!({"toBinary": true, "value": 10})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({"success": true, "result": "1010", "isBinary": true})
    );
}

#[tokio::test]
async fn binary_to_decimal() {
    let (status, json) = post(
        app(),
        "/binary/convert",
        json!({"toBinary": false, "binaryValue": "1010"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({"success": true, "result": "10", "isBinary": false})
    );
}

#[tokio::test]
async fn fractional_value_is_not_convertible() {
    expect_failure(
        "/binary/convert",
        json!({"toBinary": true, "value": 2.5}),
        "Only positive integers can be converted to binary",
    )
    .await;
}

#[tokio::test]
async fn invalid_binary_digit_is_a_conversion_error() {
    let (status, json) = post(
        app(),
        "/binary/convert",
        json!({"toBinary": false, "binaryValue": "102"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        json["errorMessage"]
            .as_str()
            .unwrap()
            .starts_with("Conversion error: ")
    );
}

#[tokio::test]
async fn configured_binary_limit_applies() {
    let service = Service::new(ServiceConfig {
        max_binary_value: 255,
    });
    let app = register_routes(Router::new(), Arc::new(service));

    let (status, json) = post(app, "/binary/convert", json!({"toBinary": true, "value": 256})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["errorMessage"],
        "Conversion error: value exceeds the supported range (0 to 255)"
    );
}

#[tokio::test]
async fn reset_acknowledges() {
    let (status, json) = post(app(), "/reset", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({"message": "Calculator reset successfully", "success": true})
    );
}

#[tokio::test]
async fn non_numeric_operand_is_a_body_error() {
    let (status, json) = post(
        app(),
        "/calculate",
        json!({"firstOperand": "six", "secondOperand": 3, "operation": "add"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert!(
        json["errorMessage"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body")
    );
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let app = app();
    let mut tasks = Vec::new();
    for i in 0..32_u32 {
        let app = app.clone();
        tasks.push(tokio::spawn(async move {
            let (_, json) = post(
                app,
                "/calculate",
                json!({"firstOperand": i, "secondOperand": 1, "operation": "add"}),
            )
            .await;
            (i, json["result"].as_f64())
        }));
    }
    for task in tasks {
        let (i, result) = task.await.unwrap();
        assert_eq!(result, Some(f64::from(i) + 1.0));
    }
}
