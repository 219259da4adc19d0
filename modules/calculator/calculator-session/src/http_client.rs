//! HTTP implementation of `CalculatorClient`
//!
//! Talks JSON to the calculator REST routes. The server answers domain
//! failures with a non-2xx status and a `{ success: false, errorMessage }`
//! body; those come back as [`CalculatorError::Rejected`]. Anything that
//! prevents reading such an answer (connect failure, timeout, a body that is
//! not the expected JSON) is a [`CalculatorError::Transport`].

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use calculator_sdk::{BinaryConversion, CalculatorClient, CalculatorError};
use http::header::{ACCEPT, CONTENT_TYPE};
use http::Request;
use http_body_util::{BodyExt, Full};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::{TokioExecutor, TokioTimer};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::HttpClientConfig;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CalculateBody<'a> {
    first_operand: f64,
    second_operand: f64,
    operation: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AdvancedBody<'a> {
    operand: f64,
    function: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConvertBody<'a> {
    to_binary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    binary_value: Option<&'a str>,
}

#[derive(Serialize)]
struct EmptyBody {}

/// Union of every response shape the calculator routes produce.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<T> {
    success: bool,
    result: Option<T>,
    is_binary: Option<bool>,
    message: Option<String>,
    error_message: Option<String>,
}

/// `CalculatorClient` over HTTP/1.1 JSON.
#[derive(Clone)]
pub struct CalculatorHttpClient {
    client: Client<HttpConnector, Full<Bytes>>,
    base_url: String,
    request_timeout: Duration,
}

impl CalculatorHttpClient {
    #[must_use]
    pub fn new(config: HttpClientConfig) -> Self {
        let client = Client::builder(TokioExecutor::new())
            .pool_timer(TokioTimer::new())
            .build_http();

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            request_timeout: config.request_timeout,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self, body), level = "debug")]
    async fn post<B, T>(&self, path: &str, body: &B) -> Result<Envelope<T>, CalculatorError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body).map_err(transport)?;
        let request = Request::builder()
            .method(http::Method::POST)
            .uri(format!("{}{path}", self.base_url))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(Full::new(Bytes::from(payload)))
            .map_err(transport)?;

        let exchange = async {
            let response = self.client.request(request).await.map_err(transport)?;
            let status = response.status();
            let bytes = response
                .into_body()
                .collect()
                .await
                .map_err(transport)?
                .to_bytes();
            Ok::<_, CalculatorError>((status, bytes))
        };

        let (status, bytes) = tokio::time::timeout(self.request_timeout, exchange)
            .await
            .map_err(|_| {
                transport(format!(
                    "request timed out after {:?}",
                    self.request_timeout
                ))
            })??;

        debug!(status = status.as_u16(), "calculator responded");

        let envelope: Envelope<T> = serde_json::from_slice(&bytes).map_err(|e| {
            transport(format!("unexpected response body (status {status}): {e}"))
        })?;

        if envelope.success {
            return Ok(envelope);
        }

        Err(CalculatorError::Rejected {
            status: status.as_u16(),
            message: envelope
                .error_message
                .unwrap_or_else(|| format!("Request failed with status {status}")),
        })
    }
}

fn transport(e: impl std::fmt::Display) -> CalculatorError {
    CalculatorError::Transport(e.to_string())
}

fn require<T>(value: Option<T>) -> Result<T, CalculatorError> {
    value.ok_or_else(|| transport("successful response carried no result"))
}

#[async_trait]
impl CalculatorClient for CalculatorHttpClient {
    async fn calculate(
        &self,
        first_operand: f64,
        second_operand: f64,
        operation: &str,
    ) -> Result<f64, CalculatorError> {
        let body = CalculateBody {
            first_operand,
            second_operand,
            operation,
        };
        let envelope = self.post::<_, f64>("/calculate", &body).await?;
        require(envelope.result)
    }

    async fn advanced(&self, operand: f64, function: &str) -> Result<f64, CalculatorError> {
        let body = AdvancedBody { operand, function };
        let envelope = self.post::<_, f64>("/advanced", &body).await?;
        require(envelope.result)
    }

    async fn to_binary(&self, value: f64) -> Result<BinaryConversion, CalculatorError> {
        let body = ConvertBody {
            to_binary: true,
            value: Some(value),
            binary_value: None,
        };
        let envelope = self.post::<_, String>("/binary/convert", &body).await?;
        Ok(BinaryConversion {
            is_binary: envelope.is_binary.unwrap_or(true),
            result: require(envelope.result)?,
        })
    }

    async fn from_binary(&self, binary_value: &str) -> Result<BinaryConversion, CalculatorError> {
        let body = ConvertBody {
            to_binary: false,
            value: None,
            binary_value: Some(binary_value),
        };
        let envelope = self.post::<_, String>("/binary/convert", &body).await?;
        Ok(BinaryConversion {
            is_binary: envelope.is_binary.unwrap_or(false),
            result: require(envelope.result)?,
        })
    }

    async fn reset(&self) -> Result<String, CalculatorError> {
        let envelope = self.post::<_, String>("/reset", &EmptyBody {}).await?;
        require(envelope.message)
    }
}
