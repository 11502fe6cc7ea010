//! Reads the user id out of an access token.
//!
//! The backend issues JWTs whose `sub` claim is the user id, encoded as a
//! string (`"3"`). The payload is decoded but the signature is **not**
//! verified: the id is only used to label the viewer's own books.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::Deserialize;
use store::UserId;

use crate::ApiError;

const PAYLOAD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Deserialize)]
#[serde(untagged)]
enum Subject {
    Number(i64),
    Text(String),
}

#[derive(Deserialize)]
struct Claims {
    sub: Subject,
}

/// Decode the `sub` claim of `token` into a [`UserId`].
pub fn subject(token: &str) -> Result<UserId, ApiError> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| ApiError::Token("formato inesperado".to_string()))?;
    let bytes = PAYLOAD
        .decode(payload)
        .map_err(|e| ApiError::Token(e.to_string()))?;
    let claims: Claims =
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Token(e.to_string()))?;
    match claims.sub {
        Subject::Number(id) => Ok(UserId(id)),
        Subject::Text(id) => id
            .trim()
            .parse()
            .map(UserId)
            .map_err(|_| ApiError::Token(format!("sub não numérico: {id}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

    fn token_with(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        format!("{header}.{}.signature", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn test_string_subject() {
        let token = token_with(r#"{"sub":"42","exp":1700000000}"#);
        assert_eq!(subject(&token).unwrap(), UserId(42));
    }

    #[test]
    fn test_numeric_subject() {
        let token = token_with(r#"{"sub":7}"#);
        assert_eq!(subject(&token).unwrap(), UserId(7));
    }

    #[test]
    fn test_padded_payload() {
        let token = format!("h.{}.s", URL_SAFE.encode(r#"{"sub":"1"}"#));
        assert!(token.contains('='));
        assert_eq!(subject(&token).unwrap(), UserId(1));
    }

    #[test]
    fn test_rejects_opaque_token() {
        assert!(matches!(subject("not-a-jwt"), Err(ApiError::Token(_))));
    }

    #[test]
    fn test_rejects_non_numeric_subject() {
        let token = token_with(r#"{"sub":"ana@example.com"}"#);
        assert!(matches!(subject(&token), Err(ApiError::Token(_))));
    }

    #[test]
    fn test_rejects_missing_subject() {
        let token = token_with(r#"{"exp":1}"#);
        assert!(matches!(subject(&token), Err(ApiError::Token(_))));
    }
}
