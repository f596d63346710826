// Fri Jan 16 2026 - Alex

use super::error::ReportResult;
use serde::Serialize;
use serde_json::Value;
use std::error::Error;

/// One entry of a report's message block.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Wrapped, indented and colorized prose.
    Text(String),
    /// Objects, arrays and `null`, printed through the structured formatter.
    Structured(Value),
    /// Numbers, booleans and other scalars, printed as-is.
    Scalar(String),
}

impl Message {
    pub fn text(text: impl Into<String>) -> Self {
        Message::Text(text.into())
    }

    pub fn structured<T: Serialize>(value: &T) -> ReportResult<Self> {
        Ok(Message::from(serde_json::to_value(value)?))
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Message::Text(text),
            Value::Number(n) => Message::Scalar(n.to_string()),
            Value::Bool(b) => Message::Scalar(b.to_string()),
            other => Message::Structured(other),
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<i64> for Message {
    fn from(n: i64) -> Self {
        Message::Scalar(n.to_string())
    }
}

impl From<f64> for Message {
    fn from(n: f64) -> Self {
        Message::Scalar(n.to_string())
    }
}

impl From<bool> for Message {
    fn from(b: bool) -> Self {
        Message::Scalar(b.to_string())
    }
}

/// The error's own message followed by one `Caused by:` line per source.
pub fn messages_from_error(error: &(dyn Error + 'static)) -> Vec<Message> {
    let mut messages = vec![Message::Text(error.to_string())];

    let mut source = error.source();
    while let Some(cause) = source {
        messages.push(Message::Text(format!("Caused by: {}", cause)));
        source = cause.source();
    }

    messages
}
