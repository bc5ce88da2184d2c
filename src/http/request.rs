use serde_json::Value;

use super::method::HttpMethod;

/// One endpoint call the suite wants to make. The path is relative to the
/// configured base URL and the fixed `/api/` prefix; the payload is only
/// sent for POST requests.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub payload: Option<Value>,
    pub expected_status: u16,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            payload: None,
            expected_status: 200,
        }
    }

    pub fn post(path: impl Into<String>, payload: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            payload: Some(payload),
            expected_status: 200,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Delete,
            path: path.into(),
            payload: None,
            expected_status: 200,
        }
    }

    /// Override the expected status code (defaults to 200).
    pub fn expecting(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }
}
