//! Backend response envelope

use serde::{Deserialize, Serialize};

use crate::constants::FALLBACK_ERROR_MESSAGE;

/// Fixed outer shape of every backend response: `{ payload, message }`
///
/// Both fields are optional on the wire. A missing or `null` payload is
/// represented as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    pub payload: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(payload: T) -> Self {
        Self { payload: Some(payload), message: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { payload: None, message: Some(message.into()) }
    }

    /// User-facing text for a failed request
    pub fn error_message(&self) -> &str {
        self.message.as_deref().filter(|m| !m.trim().is_empty()).unwrap_or(FALLBACK_ERROR_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_payload_and_message() {
        let envelope: Envelope =
            serde_json::from_str(r#"{ "payload": null, "message": null }"#).unwrap();
        assert!(envelope.payload.is_none());
        assert_eq!(envelope.error_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn missing_fields_default_to_none() {
        let envelope: Envelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.payload.is_none());
        assert!(envelope.message.is_none());
    }

    #[test]
    fn blank_message_uses_fallback() {
        let envelope: Envelope = Envelope::error("  ");
        assert_eq!(envelope.error_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn carries_backend_message() {
        let envelope: Envelope =
            serde_json::from_str(r#"{ "payload": null, "message": "CNPJ invalid" }"#).unwrap();
        assert_eq!(envelope.error_message(), "CNPJ invalid");
    }
}
