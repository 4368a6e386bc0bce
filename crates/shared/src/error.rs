use serde_json::Value;
use thiserror::Error;

/// Error body returned by the admin API on a rejected request.
///
/// Kept as loose JSON so one oddly typed field never hides another. Create
/// failures are reported from `message` only; lookups fall back to the
/// server's `error` field.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBody(Value);

impl ErrorBody {
    pub fn parse(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok().map(Self)
    }

    /// `message` rendered as display text. Empty strings, zero, `false` and
    /// `null` count as absent; objects and arrays are ignored.
    pub fn message(&self) -> Option<String> {
        self.field_text("message")
    }

    pub fn detail(&self) -> Option<String> {
        self.message().or_else(|| self.field_text("error"))
    }

    fn field_text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(text) if !text.is_empty() => Some(text.clone()),
            Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }

    /// Best-effort extraction of the server message from a raw body.
    pub fn message_from_bytes(body: &[u8]) -> Option<String> {
        Self::parse(body)?.message()
    }

    pub fn detail_from_bytes(body: &[u8]) -> Option<String> {
        Self::parse(body)?.detail()
    }
}

#[derive(Debug, Error)]
#[error("unknown severity: {0}")]
pub struct UnknownSeverity(pub String);
