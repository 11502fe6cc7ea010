//! Integration tests for the HTTP gateway against a mock backend.

mod support;

use api::{ApiClient, ApiError, ApiSettings};
use serde_json::json;
use store::{BookQuery, Credentials, LoanStatus, NewBook, Registration, UserId};
use support::{book_json, can_bind_localhost, client_for, loan_json, token_for};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

macro_rules! require_localhost {
    () => {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
    };
}

fn registration(email: &str) -> Registration {
    Registration {
        name: "Novo Aluno CC".to_string(),
        email: email.to_string(),
        password: "senhaforte".to_string(),
    }
}

#[tokio::test]
async fn test_login_returns_access_token() {
    require_localhost!();
    let server = MockServer::start().await;
    let token = token_for(1);

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .and(body_json(json!({"email": "cypress@test.com", "password": "cypresspassword"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": token, "token_type": "bearer"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let access = client_for(&server)
        .login(&Credentials {
            email: "cypress@test.com".to_string(),
            password: "cypresspassword".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(access.access_token, token);
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    require_localhost!();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Credenciais inválidas."})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .login(&Credentials {
            email: "cypress@test.com".to_string(),
            password: "wrongpassword".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "Credenciais inválidas.");
}

#[tokio::test]
async fn test_register_ignores_created_user() {
    require_localhost!();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .and(body_json(json!({
            "name": "Novo Aluno CC",
            "email": "novo@test.com",
            "password": "senhaforte"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"id": 9, "name": "Novo Aluno CC", "email": "novo@test.com", "points": 50}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .register(&registration("novo@test.com"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_register_duplicate_email() {
    require_localhost!();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Email já cadastrado."})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .register(&registration("dup@test.com"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Email já cadastrado.");
}

#[tokio::test]
async fn test_register_validation_errors() {
    require_localhost!();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                {"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error.email"},
                {"loc": ["body", "password"], "msg": "Senha deve ter pelo menos 6 caracteres", "type": "value_error"}
            ]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .register(&registration("nope"))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "body > email: value is not a valid email address, body > password: Senha deve ter pelo menos 6 caracteres"
    );
}

#[tokio::test]
async fn test_list_books_with_filters() {
    require_localhost!();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/books/"))
        .and(query_param("q", "Casmurro"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([book_json(1, 2, true, 10)])))
        .expect(1)
        .mount(&server)
        .await;

    let books = client_for(&server)
        .list_books(&BookQuery::from_input("Casmurro", ""))
        .await
        .unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].owner_id, UserId(2));
    assert_eq!(books[0].points_required, 10);
}

#[tokio::test]
async fn test_create_book_sends_bearer_token() {
    require_localhost!();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/books/"))
        .and(header("authorization", "Bearer tok-123"))
        .and(body_json(json!({
            "title": "Livro 5",
            "author": "Machado de Assis",
            "description": "",
            "points_required": 15
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(book_json(5, 1, true, 15)))
        .expect(1)
        .mount(&server)
        .await;

    let book = client_for(&server)
        .create_book(
            "tok-123",
            &NewBook {
                title: "Livro 5".to_string(),
                author: "Machado de Assis".to_string(),
                description: String::new(),
                points_required: 15,
            },
        )
        .await
        .unwrap();
    assert_eq!(book.id, 5);
    assert!(book.available);
}

#[tokio::test]
async fn test_loan_endpoints() {
    require_localhost!();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/loans/request"))
        .and(header("authorization", "Bearer tok"))
        .and(body_json(json!({"book_id": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(loan_json(11, 3, "requested")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/loans/11/confirm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(loan_json(11, 3, "active")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/loans/11/return"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(loan_json(11, 3, "returned")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let loan = client.request_loan("tok", 3).await.unwrap();
    assert_eq!(loan.status, LoanStatus::Requested);
    let loan = client.confirm_loan("tok", loan.id).await.unwrap();
    assert_eq!(loan.status, LoanStatus::Active);
    let loan = client.return_loan("tok", loan.id).await.unwrap();
    assert_eq!(loan.status, LoanStatus::Returned);
}

#[tokio::test]
async fn test_loan_request_rejected() {
    require_localhost!();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/loans/request"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": {"msg": "Livro indisponível."}})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).request_loan("tok", 3).await.unwrap_err();
    assert_eq!(err.to_string(), "Livro indisponível.");
}

#[tokio::test]
async fn test_my_loans_and_overdue() {
    require_localhost!();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/loans/my_loans"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            loan_json(1, 3, "active"),
            loan_json(2, 4, "returned")
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/loans/overdue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let loans = client.my_loans("tok").await.unwrap();
    assert_eq!(loans.len(), 2);
    assert_eq!(loans[1].status, LoanStatus::Returned);
    assert!(client.overdue_loans().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_success_with_unexpected_body() {
    require_localhost!();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/books/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_books(&BookQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_backend() {
    let client = ApiClient::new(&ApiSettings::new("http://127.0.0.1:1/api"));
    let err = client.list_books(&BookQuery::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
