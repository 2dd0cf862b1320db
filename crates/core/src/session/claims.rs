//! Claims validator
//!
//! A credential is `header.payload.signature`. Only the payload is read, and
//! its signature is never checked: the backend is the authority, the client
//! only needs the subject, role and expiry to drive its own behaviour.

use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::{DecodePaddingMode, GeneralPurposeConfig};
use base64::Engine;
use serde_json::{Map, Value};
use thiserror::Error;
use tudofresco_domain::{AccessLevel, Claims};

/// Base64url that accepts both padded and unpadded segments
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Why a credential could not be turned into [`Claims`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimsError {
    #[error("no credential present")]
    Absent,

    #[error("expected 3 dot-separated segments, found {segments}")]
    Malformed { segments: usize },

    #[error("payload segment is not base64url: {0}")]
    Encoding(String),

    #[error("payload is not a JSON object: {0}")]
    Payload(String),

    #[error("claim '{0}' is missing")]
    MissingField(&'static str),

    #[error("claim '{field}' is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Decode and validate the payload segment of `token`
///
/// `sub` must be a string, `role` one of the access-level wire values
/// (exact match), and `exp` a number of epoch seconds. Fractional `exp`
/// values are truncated.
pub fn decode_claims(token: &str) -> Result<Claims, ClaimsError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(ClaimsError::Malformed { segments: segments.len() });
    }

    // Tolerate the standard alphabet as well.
    let payload = segments[1].replace('+', "-").replace('/', "_");
    let bytes =
        PAYLOAD_ENGINE.decode(payload).map_err(|e| ClaimsError::Encoding(e.to_string()))?;

    let object = match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(object)) => object,
        Ok(other) => return Err(ClaimsError::Payload(format!("found {}", json_kind(&other)))),
        Err(e) => return Err(ClaimsError::Payload(e.to_string())),
    };

    let subject = string_claim(&object, "sub")?.to_string();
    let role = role_claim(&object)?;
    let expires_at = exp_claim(&object)?;

    Ok(Claims { subject, role, expires_at })
}

fn string_claim<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ClaimsError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(ClaimsError::MissingField(field)),
        Some(Value::String(value)) => Ok(value),
        Some(other) => Err(ClaimsError::InvalidField {
            field,
            reason: format!("expected string, found {}", json_kind(other)),
        }),
    }
}

fn role_claim(object: &Map<String, Value>) -> Result<AccessLevel, ClaimsError> {
    let raw = string_claim(object, "role")?;
    AccessLevel::from_claim(raw).ok_or_else(|| ClaimsError::InvalidField {
        field: "role",
        reason: format!("unknown access level '{raw}'"),
    })
}

#[allow(clippy::cast_possible_truncation)]
fn exp_claim(object: &Map<String, Value>) -> Result<i64, ClaimsError> {
    match object.get("exp") {
        None | Some(Value::Null) => Err(ClaimsError::MissingField("exp")),
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|value| i64::try_from(value).unwrap_or(i64::MAX)))
            // `as` saturates for floats.
            .or_else(|| number.as_f64().map(|value| value.trunc() as i64))
            .ok_or_else(|| ClaimsError::InvalidField {
                field: "exp",
                reason: format!("unrepresentable number {number}"),
            }),
        Some(other) => Err(ClaimsError::InvalidField {
            field: "exp",
            reason: format!("expected number, found {}", json_kind(other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tudofresco_common::testing::TokenFactory;

    use super::*;

    #[test]
    fn decodes_well_formed_token() {
        let token =
            TokenFactory::new().subject("abc").role("ADMIN").expires_at(1_800_000_000).build();
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims, Claims::new("abc", AccessLevel::Admin, 1_800_000_000));
    }

    #[test]
    fn counts_segments() {
        assert_eq!(decode_claims("abc"), Err(ClaimsError::Malformed { segments: 1 }));
        assert_eq!(decode_claims("a.b.c.d"), Err(ClaimsError::Malformed { segments: 4 }));
        assert_eq!(decode_claims(""), Err(ClaimsError::Malformed { segments: 1 }));
    }

    #[test]
    fn rejects_non_base64_payload() {
        assert!(matches!(decode_claims("a.!!!.c"), Err(ClaimsError::Encoding(_))));
    }

    #[test]
    fn rejects_non_object_payload() {
        let token = TokenFactory::from_payload("[1,2]");
        assert!(matches!(decode_claims(&token), Err(ClaimsError::Payload(_))));
        let token = TokenFactory::from_payload("{ nope");
        assert!(matches!(decode_claims(&token), Err(ClaimsError::Payload(_))));
    }

    #[test]
    fn requires_every_claim() {
        let token = TokenFactory::new().without("sub").build();
        assert_eq!(decode_claims(&token), Err(ClaimsError::MissingField("sub")));
        let token = TokenFactory::new().without("exp").build();
        assert_eq!(decode_claims(&token), Err(ClaimsError::MissingField("exp")));
        let token = TokenFactory::new().claim("role", Value::Null).build();
        assert_eq!(decode_claims(&token), Err(ClaimsError::MissingField("role")));
    }

    #[test]
    fn rejects_mistyped_claims() {
        let token = TokenFactory::new().claim("sub", json!(42)).build();
        assert!(matches!(
            decode_claims(&token),
            Err(ClaimsError::InvalidField { field: "sub", .. })
        ));

        let token = TokenFactory::new().claim("exp", json!("1800000000")).build();
        assert!(matches!(
            decode_claims(&token),
            Err(ClaimsError::InvalidField { field: "exp", .. })
        ));
    }

    #[test]
    fn role_must_match_exactly() {
        let token = TokenFactory::new().role("SUPERUSER").build();
        assert!(matches!(
            decode_claims(&token),
            Err(ClaimsError::InvalidField { field: "role", .. })
        ));
        let token = TokenFactory::new().role("admin").build();
        assert!(decode_claims(&token).is_err());
    }

    #[test]
    fn fractional_exp_is_truncated() {
        let token = TokenFactory::new().claim("exp", json!(1_800_000_000.9)).build();
        assert_eq!(decode_claims(&token).unwrap().expires_at, 1_800_000_000);
    }

    #[test]
    fn accepts_padded_and_standard_alphabet_payloads() {
        use base64::engine::general_purpose::STANDARD;

        let payload = STANDARD.encode(r#"{"sub":"a?>","role":"EMPLOYEE","exp":1}"#);
        let token = format!("h.{payload}.s");
        assert_eq!(decode_claims(&token).unwrap().role, AccessLevel::Employee);
    }
}
