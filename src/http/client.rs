use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, SET_COOKIE};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::history::{RequestLog, RequestRecord};

use super::method::HttpMethod;
use super::request::ApiRequest;
use super::response::ApiResponse;

/// Fixed per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while building or sending a request. They are converted
/// into failed `ApiResponse`s at the `request` boundary and never cross into
/// the suite.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(HttpMethod),
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// One cookie-bearing HTTP session against the backend.
///
/// Cookies set by any response are attached to every subsequent request for
/// the lifetime of the client, which is how the auth bootstrap carries the
/// session into the feature checks.
pub struct ApiClient {
    base_url: String,
    client: Client,
    history: RequestLog,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            history: RequestLog::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Round trips performed so far, in execution order.
    pub fn history(&self) -> &RequestLog {
        &self.history
    }

    /// Issue a request and evaluate it against its expected status.
    ///
    /// `success` is true iff the observed status equals the expectation.
    /// Transport failures and unsupported methods come back as failed
    /// responses with an `error` body rather than propagating.
    pub fn request(&mut self, request: &ApiRequest) -> ApiResponse {
        let started = Instant::now();
        let mut response = match self.send(request) {
            Ok((status, cookies_set, text)) => {
                let success = status == request.expected_status;
                debug!(
                    method = %request.method,
                    path = %request.path,
                    status,
                    expected = request.expected_status,
                    "round trip"
                );
                ApiResponse {
                    success,
                    status: Some(status),
                    cookies_set,
                    duration_ms: 0,
                    body: parse_body(&text),
                }
            }
            Err(err) => {
                warn!(method = %request.method, path = %request.path, error = %err, "request failed");
                ApiResponse::failed(err.to_string())
            }
        };
        response.duration_ms = started.elapsed().as_millis() as u64;

        self.history.push(RequestRecord::now(
            request.method,
            request.path.clone(),
            response.status,
            response.duration_ms,
        ));
        response
    }

    fn send(&self, request: &ApiRequest) -> Result<(u16, usize, String), ClientError> {
        let url = format!("{}/api/{}", self.base_url, request.path);
        let method: reqwest::Method = match request.method {
            HttpMethod::Get | HttpMethod::Post | HttpMethod::Delete => request.method.into(),
            other => return Err(ClientError::UnsupportedMethod(other)),
        };

        let mut builder = self.client.request(method, &url);
        // The payload only travels on POST; other methods ignore it
        if request.method == HttpMethod::Post {
            if let Some(payload) = &request.payload {
                builder = builder.json(payload);
            }
        }

        let response = builder.header(CONTENT_TYPE, "application/json").send()?;
        let status = response.status().as_u16();
        let cookies_set = response.headers().get_all(SET_COOKIE).iter().count();
        let text = response.text()?;
        Ok((status, cookies_set, text))
    }
}

/// Parse the body as a JSON object, falling back to a `raw_response` wrapper
/// for anything else (non-JSON text, or JSON that is not an object).
fn parse_body(text: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(object)) => object,
        _ => {
            let mut body = Map::new();
            body.insert("raw_response".to_string(), Value::String(text.to_string()));
            body
        }
    }
}
