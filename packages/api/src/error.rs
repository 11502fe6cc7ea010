//! # Gateway errors
//!
//! Every gateway call returns `Result<T, ApiError>`. For HTTP error responses
//! the user-facing text is computed once, by [`error_message`], and stored in
//! [`ApiError::Status`]; `Display` prints it verbatim so the UI can prefix it
//! (`"Falha no Login: {err}"`).
//!
//! [`error_message`] reads the backend's `detail` field in four tiers, first
//! match wins:
//!
//! 1. `detail` is a string: used as is.
//! 2. `detail` is a list of validation errors `{loc, msg}`: each becomes
//!    `"<loc joined by ' > '>: <msg>"`, and the entries are joined by `", "`.
//! 3. `detail` is an object with a `msg`: that `msg`.
//! 4. Anything else: the whole payload as compact JSON.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response from the backend.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// A 2xx response whose body did not match the expected shape.
    #[error("resposta inválida do servidor: {0}")]
    Decode(#[from] serde_json::Error),
    /// The access token could not be decoded.
    #[error("token de acesso inválido: {0}")]
    Token(String),
    /// An authenticated endpoint was called without a session.
    #[error("Você precisa entrar para continuar.")]
    Unauthenticated,
}

impl ApiError {
    /// HTTP status for [`ApiError::Status`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build a [`ApiError::Status`] from a raw error body.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let message = match serde_json::from_slice::<Value>(body) {
            Ok(payload) => error_message(&payload),
            Err(_) => {
                let text = String::from_utf8_lossy(body);
                let text = text.trim();
                if text.is_empty() {
                    format!("Erro desconhecido (HTTP {status})")
                } else {
                    text.to_string()
                }
            }
        };
        ApiError::Status { status, message }
    }
}

/// Extract the user-facing message from an error payload.
pub fn error_message(payload: &Value) -> String {
    match payload.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(Value::Array(entries)) => entries
            .iter()
            .map(validation_entry)
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::Object(detail)) if detail.get("msg").is_some_and(is_truthy) => {
            detail.get("msg").map(text).unwrap_or_default()
        }
        _ => payload.to_string(),
    }
}

fn validation_entry(entry: &Value) -> String {
    let msg = entry.get("msg").map(text).unwrap_or_default();
    match entry.get("loc") {
        Some(Value::Array(loc)) => {
            let path = loc.iter().map(text).collect::<Vec<_>>().join(" > ");
            format!("{path}: {msg}")
        }
        Some(other) => format!("{}: {msg}", text(other)),
        None => msg,
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_detail() {
        let payload = json!({"detail": "Credenciais inválidas."});
        assert_eq!(error_message(&payload), "Credenciais inválidas.");
    }

    #[test]
    fn test_validation_list() {
        let payload = json!({
            "detail": [
                {"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"},
                {"loc": ["body", "password"], "msg": "Senha deve ter pelo menos 6 caracteres"}
            ]
        });
        assert_eq!(
            error_message(&payload),
            "body > email: value is not a valid email address, body > password: Senha deve ter pelo menos 6 caracteres"
        );
    }

    #[test]
    fn test_validation_loc_with_index() {
        let payload = json!({"detail": [{"loc": ["body", 0, "title"], "msg": "field required"}]});
        assert_eq!(error_message(&payload), "body > 0 > title: field required");
    }

    #[test]
    fn test_empty_validation_list() {
        assert_eq!(error_message(&json!({"detail": []})), "");
    }

    #[test]
    fn test_object_detail_with_msg() {
        let payload = json!({"detail": {"msg": "Livro indisponível.", "code": 17}});
        assert_eq!(error_message(&payload), "Livro indisponível.");
    }

    #[test]
    fn test_object_detail_without_msg_falls_back_to_payload() {
        let payload = json!({"detail": {"code": 17}});
        assert_eq!(error_message(&payload), r#"{"detail":{"code":17}}"#);
    }

    #[test]
    fn test_payload_without_detail() {
        let payload = json!({"error": "boom"});
        assert_eq!(error_message(&payload), r#"{"error":"boom"}"#);
    }

    #[test]
    fn test_non_json_body() {
        let err = ApiError::from_response(502, b"Bad Gateway\n");
        assert_eq!(err.to_string(), "Bad Gateway");
        assert_eq!(err.status(), Some(502));

        let err = ApiError::from_response(500, b"");
        assert_eq!(err.to_string(), "Erro desconhecido (HTTP 500)");
    }

    #[test]
    fn test_status_display_is_the_message() {
        let err = ApiError::from_response(400, "{\"detail\": \"Email já cadastrado.\"}".as_bytes());
        assert_eq!(err.to_string(), "Email já cadastrado.");
    }
}
