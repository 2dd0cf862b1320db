//! Decoded credential claims

use serde::{Deserialize, Serialize};

use super::access::AccessLevel;

/// Structural projection of a credential's payload segment
///
/// `expires_at` is kept in epoch **seconds**, as issued. Comparisons against
/// wall-clock time convert it to milliseconds exactly once, in
/// [`Claims::is_expired_at`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "sub")]
    pub subject: String,
    pub role: AccessLevel,
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl Claims {
    pub fn new(subject: impl Into<String>, role: AccessLevel, expires_at: i64) -> Self {
        Self { subject: subject.into(), role, expires_at }
    }

    /// Expiration instant in epoch milliseconds
    pub fn expires_at_millis(&self) -> i64 {
        self.expires_at.saturating_mul(1000)
    }

    /// `true` once `now_millis` has reached the expiration instant
    pub fn is_expired_at(&self, now_millis: i64) -> bool {
        now_millis >= self.expires_at_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_boundary_is_inclusive() {
        let claims = Claims::new("user-1", AccessLevel::Admin, 1_700_000_000);
        assert!(!claims.is_expired_at(1_699_999_999_999));
        assert!(claims.is_expired_at(1_700_000_000_000));
        assert!(claims.is_expired_at(1_700_000_000_001));
    }

    #[test]
    fn wire_names_match_token_payload() {
        let claims = Claims::new("abc", AccessLevel::Employee, 10);
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json, serde_json::json!({ "sub": "abc", "role": "EMPLOYEE", "exp": 10 }));
    }
}
