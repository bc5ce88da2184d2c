use serde_json::{Map, Value};

/// Outcome of one round trip as seen by the suite.
///
/// `success` tracks status equality against the request's expectation and
/// nothing else. The body is always inspectable: the parsed JSON object, a
/// `raw_response` wrapper when the body is not JSON, or an `error` wrapper
/// when the request never completed.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub success: bool,
    pub status: Option<u16>,
    pub cookies_set: usize,
    pub duration_ms: u64,
    pub body: Map<String, Value>,
}

impl ApiResponse {
    /// Failure outcome carrying an error message body. Used for transport
    /// errors and unsupported methods, where no status was observed.
    pub fn failed(message: impl Into<String>) -> Self {
        let mut body = Map::new();
        body.insert("error".to_string(), Value::String(message.into()));
        Self {
            success: false,
            status: None,
            cookies_set: 0,
            duration_ms: 0,
            body,
        }
    }
}
