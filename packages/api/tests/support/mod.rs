//! Shared helpers for the gateway integration tests.

#![allow(dead_code)]

use api::{ApiClient, ApiSettings, ClientState};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{json, Value};
use store::{Load, Navigation, Session};
use wiremock::MockServer;

pub fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

/// A client pointed at the mock server, with the `/api` prefix the real
/// backend mounts its routers under.
pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiSettings::new(format!("{}/api", server.uri())))
}

/// An unsigned JWT-shaped token whose `sub` is `user_id`.
pub fn token_for(user_id: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"{user_id}","exp":4102444800}}"#));
    format!("{header}.{claims}.c2lnbmF0dXJl")
}

pub fn book_json(id: i64, owner_id: i64, available: bool, points_required: i64) -> Value {
    json!({
        "id": id,
        "title": format!("Livro {id}"),
        "author": "Machado de Assis",
        "description": null,
        "points_required": points_required,
        "owner_id": owner_id,
        "available": available
    })
}

pub fn loan_json(id: i64, book_id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "book_id": book_id,
        "lender_id": 2,
        "borrower_id": 1,
        "requested_at": "2024-05-01T10:00:00",
        "start_date": null,
        "due_date": null,
        "returned_date": null,
        "status": status
    })
}

/// Plain-value client state, standing in for the UI's signals.
#[derive(Debug, Default)]
pub struct TestState {
    pub session: Session,
    pub navigation: Navigation,
}

impl TestState {
    /// Signed in and on the main screen, as after a login.
    pub fn signed_in(user_id: i64) -> Self {
        let mut navigation = Navigation::new();
        navigation.show_main();
        Self {
            session: Session::sign_in(
                token_for(user_id),
                store::UserId(user_id),
                "me@test.com".to_string(),
            ),
            navigation,
        }
    }
}

impl ClientState for TestState {
    fn session(&self) -> Session {
        self.session.clone()
    }

    fn update_session<R>(&mut self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut self.session)
    }

    fn reload(&mut self, load: Load) {
        self.navigation.reload(load);
    }
}
