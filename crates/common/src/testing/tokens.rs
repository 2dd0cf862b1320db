//! Unsigned credentials for session tests
//!
//! The client never verifies signatures, so tests only need a well-formed
//! `header.payload.signature` string whose middle segment is base64url JSON.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{json, Map, Value};

use crate::time::Clock;

const HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;
const SIGNATURE: &str = "c2lnbmF0dXJl";

/// Builder for test credentials
///
/// Starts with `sub = "user-1"`, `role = "STORE_OWNER"` and `exp` one hour
/// after the epoch second 1 700 000 000.
#[derive(Debug, Clone)]
pub struct TokenFactory {
    claims: Map<String, Value>,
}

impl TokenFactory {
    pub fn new() -> Self {
        let mut claims = Map::new();
        claims.insert("sub".into(), json!("user-1"));
        claims.insert("role".into(), json!("STORE_OWNER"));
        claims.insert("exp".into(), json!(1_700_003_600_i64));
        Self { claims }
    }

    #[must_use]
    pub fn subject(self, subject: &str) -> Self {
        self.claim("sub", json!(subject))
    }

    #[must_use]
    pub fn role(self, role: &str) -> Self {
        self.claim("role", json!(role))
    }

    /// Set `exp` in epoch seconds
    #[must_use]
    pub fn expires_at(self, secs: i64) -> Self {
        self.claim("exp", json!(secs))
    }

    /// Set an arbitrary claim, including ill-typed values
    #[must_use]
    pub fn claim(mut self, name: &str, value: Value) -> Self {
        self.claims.insert(name.to_string(), value);
        self
    }

    /// Drop a claim entirely
    #[must_use]
    pub fn without(mut self, name: &str) -> Self {
        self.claims.remove(name);
        self
    }

    /// Build a credential expiring `secs` seconds after the clock's now
    pub fn expires_in_secs(self, clock: &dyn Clock, secs: i64) -> String {
        let now_secs = clock.millis_since_epoch() / 1000;
        self.expires_at(now_secs + secs).build()
    }

    pub fn build(&self) -> String {
        Self::from_payload(&Value::Object(self.claims.clone()).to_string())
    }

    /// Wrap an arbitrary payload string, useful for malformed JSON cases
    pub fn from_payload(payload: &str) -> String {
        format!(
            "{}.{}.{}",
            URL_SAFE_NO_PAD.encode(HEADER),
            URL_SAFE_NO_PAD.encode(payload),
            SIGNATURE
        )
    }
}

impl Default for TokenFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_of(token: &str) -> Value {
        let segment = token.split('.').nth(1).unwrap();
        serde_json::from_slice(&URL_SAFE_NO_PAD.decode(segment).unwrap()).unwrap()
    }

    #[test]
    fn builds_three_segments() {
        let token = TokenFactory::new().subject("abc").role("ADMIN").expires_at(10).build();
        assert_eq!(token.split('.').count(), 3);
        assert_eq!(payload_of(&token), json!({ "sub": "abc", "role": "ADMIN", "exp": 10 }));
    }

    #[test]
    fn can_drop_and_mistype_claims() {
        let token = TokenFactory::new().without("sub").claim("exp", json!("soon")).build();
        let payload = payload_of(&token);
        assert!(payload.get("sub").is_none());
        assert_eq!(payload["exp"], "soon");
    }

    #[test]
    fn expiry_relative_to_clock() {
        let clock = crate::testing::MockClock::at_secs(1_000);
        let token = TokenFactory::new().expires_in_secs(&clock, 60);
        assert_eq!(payload_of(&token)["exp"], 1_060);
    }
}
