//! Failed API calls and the single-message normalization used by every view

use serde_json::Value;

pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Everything known about a failed request.
///
/// Built by the HTTP client for both transport failures (no status) and
/// non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiFailure {
    /// HTTP status, `None` when the request never got a response
    pub status: Option<u16>,
    /// Raw `Retry-After` header value
    pub retry_after: Option<String>,
    /// Response body. Non-JSON bodies are stored as a JSON string.
    pub body: Option<Value>,
    /// Transport-level error text
    pub transport: Option<String>,
}

impl ApiFailure {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            transport: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn http(status: u16, body: Option<Value>) -> Self {
        Self {
            status: Some(status),
            body,
            ..Default::default()
        }
    }

    /// A non-2xx response as the HTTP client sees it. The status line doubles
    /// as the transport message so bodies without text still explain the failure.
    pub fn response(status: u16, body: Option<Value>) -> Self {
        Self {
            transport: Some(format!("Server error: {status}")),
            ..Self::http(status, body)
        }
    }

    pub fn with_retry_after(mut self, header: Option<String>) -> Self {
        self.retry_after = header;
        self
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status == Some(429)
    }

    /// Body field as a non-empty string.
    pub fn body_str(&self, field: &str) -> Option<&str> {
        self.body
            .as_ref()?
            .get(field)?
            .as_str()
            .filter(|s| !s.is_empty())
    }
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&error_message(self))
    }
}

/// Extract one human-readable message from a failure.
///
/// Priority: string body, `detail`, `message`, `non_field_errors[0]`, first
/// array-valued field's first element, first string-valued field, transport
/// message, then "Unknown error".
pub fn error_message(failure: &ApiFailure) -> String {
    body_message(failure.body.as_ref())
        .or_else(|| failure.transport.clone().filter(|t| !t.is_empty()))
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

fn body_message(body: Option<&Value>) -> Option<String> {
    match body? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(map) => {
            for key in ["detail", "message"] {
                if let Some(text) = map.get(key).and_then(value_text) {
                    return Some(text);
                }
            }
            if let Some(text) = map
                .get("non_field_errors")
                .and_then(Value::as_array)
                .and_then(|errors| errors.first())
                .and_then(value_text)
            {
                return Some(text);
            }
            // Only the first field is considered, like DRF's field-error bodies
            match map.values().next()? {
                Value::Array(items) => items.first().and_then(value_text),
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                _ => None,
            }
        }
        _ => None,
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
