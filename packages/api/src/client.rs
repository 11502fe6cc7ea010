//! HTTP client for the lending backend.
//!
//! One method per endpoint. Every response goes through [`ApiClient::execute`]:
//! non-2xx bodies become [`ApiError::Status`] via the four-tier `detail`
//! extraction, 2xx bodies are decoded as JSON. There is no retry and no
//! timeout.

use reqwest::{Method, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use store::{AccessToken, Book, BookQuery, Credentials, Loan, LoanRequest, NewBook, Registration};

use crate::{ApiError, ApiSettings};

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Self {
        Self {
            base_url: settings.base_url().to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{path}", self.base_url))
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            let err = ApiError::from_response(status.as_u16(), &body);
            tracing::debug!(status = status.as_u16(), error = %err, "backend returned an error");
            return Err(err);
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// `POST /users/register`. The created user is ignored.
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .execute(self.request(Method::POST, "/users/register").json(registration))
            .await?;
        Ok(())
    }

    /// `POST /users/login`.
    pub async fn login(&self, credentials: &Credentials) -> Result<AccessToken, ApiError> {
        self.execute(self.request(Method::POST, "/users/login").json(credentials))
            .await
    }

    /// `GET /books/`, optionally filtered by title and author.
    pub async fn list_books(&self, query: &BookQuery) -> Result<Vec<Book>, ApiError> {
        let mut request = self.request(Method::GET, "/books/");
        if !query.is_empty() {
            request = request.query(query);
        }
        self.execute(request).await
    }

    /// `POST /books/`.
    pub async fn create_book(&self, token: &str, book: &NewBook) -> Result<Book, ApiError> {
        self.execute(
            self.request(Method::POST, "/books/")
                .bearer_auth(token)
                .json(book),
        )
        .await
    }

    /// `POST /loans/request`.
    pub async fn request_loan(&self, token: &str, book_id: i64) -> Result<Loan, ApiError> {
        self.execute(
            self.request(Method::POST, "/loans/request")
                .bearer_auth(token)
                .json(&LoanRequest { book_id }),
        )
        .await
    }

    /// `POST /loans/{id}/return`.
    pub async fn return_loan(&self, token: &str, loan_id: i64) -> Result<Loan, ApiError> {
        self.execute(
            self.request(Method::POST, &format!("/loans/{loan_id}/return"))
                .bearer_auth(token),
        )
        .await
    }

    /// `POST /loans/{id}/confirm`. Moves a requested loan to active.
    pub async fn confirm_loan(&self, token: &str, loan_id: i64) -> Result<Loan, ApiError> {
        self.execute(
            self.request(Method::POST, &format!("/loans/{loan_id}/confirm"))
                .bearer_auth(token),
        )
        .await
    }

    /// `GET /loans/my_loans`: every loan where the caller is the borrower.
    pub async fn my_loans(&self, token: &str) -> Result<Vec<Loan>, ApiError> {
        self.execute(
            self.request(Method::GET, "/loans/my_loans")
                .bearer_auth(token),
        )
        .await
    }

    /// `GET /loans/overdue`.
    pub async fn overdue_loans(&self) -> Result<Vec<Loan>, ApiError> {
        self.execute(self.request(Method::GET, "/loans/overdue"))
            .await
    }
}
