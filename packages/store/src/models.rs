//! # Domain models for books, loans and users
//!
//! Defines the records exchanged with the lending backend. Every type is
//! `Serialize + Deserialize` so the gateway in the `api` crate can decode
//! responses directly into them, and `PartialEq` so Dioxus props and signals
//! can diff them.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserId`] | Numeric user identifier. Books carry it as `owner_id`; tokens carry it as the `sub` claim. |
//! | [`Book`] | A book listed on the platform. Never mutated by the client, always re-fetched. |
//! | [`NewBook`] | Request body for listing a new book. |
//! | [`BookQuery`] | Optional title/author filters for the book listing. |
//! | [`Loan`] | A loan record. Its [`LoanStatus`] decides which action the loans tab offers. |
//! | [`LoanStatus`] | `requested` → `active` → `returned`. Anything else decodes as [`LoanStatus::Unknown`]. |
//! | [`Credentials`] / [`Registration`] | Login and registration bodies. |
//!
//! Optional backend fields fall back to `None` (or `0` for `points_required`)
//! so older backends that omit them still decode.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier of a platform user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A book listed by one of the platform users.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Points debited from the borrower when a loan is requested.
    #[serde(default)]
    pub points_required: i64,
    pub owner_id: UserId,
    pub available: bool,
    /// Physical condition label, e.g. "Bom".
    #[serde(default)]
    pub condition: Option<String>,
}

impl Book {
    /// Whether `viewer` is the owner of this book.
    pub fn is_owned_by(&self, viewer: UserId) -> bool {
        self.owner_id == viewer
    }
}

/// Body of `POST /books/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub description: String,
    pub points_required: i64,
}

/// Query parameters accepted by `GET /books/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl BookQuery {
    /// Build a query from raw form input. Blank fields are dropped.
    pub fn from_input(q: &str, author: &str) -> Self {
        fn non_blank(s: &str) -> Option<String> {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Self {
            q: non_blank(q),
            author: non_blank(author),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_none() && self.author.is_none()
    }
}

/// Lifecycle state of a loan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    /// Waiting for the lender to confirm.
    Requested,
    /// Book is checked out.
    Active,
    /// Closed.
    Returned,
    #[serde(other)]
    Unknown,
}

/// A loan record as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: i64,
    pub book_id: i64,
    pub status: LoanStatus,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub returned_date: Option<String>,
    #[serde(default)]
    pub requested_at: Option<String>,
    #[serde(default)]
    pub lender_id: Option<UserId>,
    #[serde(default)]
    pub borrower_id: Option<UserId>,
}

/// Body of `POST /loans/request`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub book_id: i64,
}

/// Body of `POST /users/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /users/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful response of `POST /users/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}
