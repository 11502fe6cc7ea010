//! # Session state
//!
//! [`Session`] holds who is signed in and the bearer token used for
//! authenticated calls. It is a plain value: the UI keeps one in a signal and
//! passes it to the flows in the `api` crate, which never touch global state.
//!
//! Points are a client-side estimate. The login response carries no balance,
//! so [`Session::sign_in`] starts every user at [`INITIAL_POINTS`]. A
//! successful loan request debits the estimate via [`Session::debit`]; returns
//! do not credit it.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::models::UserId;

/// Points assumed for a freshly signed-in user.
pub const INITIAL_POINTS: i64 = 100;

/// The signed-in user as the client knows it.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: String,
    pub points: i64,
}

/// Local precondition failures, raised before any network call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error("Você precisa entrar para continuar.")]
    SignedOut,
    #[error("Você não tem pontos suficientes. Necessário: {required} pontos.")]
    InsufficientPoints { required: i64, available: i64 },
    #[error("Já existe uma solicitação em andamento para este livro.")]
    LoanInFlight { book_id: i64 },
    #[error("A devolução deste empréstimo já está em andamento.")]
    ReturnInFlight { loan_id: i64 },
}

#[derive(Clone, Debug, PartialEq)]
struct Authenticated {
    user: CurrentUser,
    token: String,
}

/// In-memory session. Empty until [`Session::sign_in`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    auth: Option<Authenticated>,
    /// Book ids with a loan request awaiting the backend.
    loans_in_flight: BTreeSet<i64>,
    /// Loan ids with a return awaiting the backend.
    returns_in_flight: BTreeSet<i64>,
}

impl Session {
    /// An empty, signed-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an authenticated session from a login result.
    pub fn sign_in(token: String, id: UserId, email: String) -> Self {
        Self {
            auth: Some(Authenticated {
                user: CurrentUser {
                    id,
                    email,
                    points: INITIAL_POINTS,
                },
                token,
            }),
            ..Self::default()
        }
    }

    /// Drop user, token and any pending loan markers.
    pub fn sign_out(&mut self) {
        *self = Self::default();
    }

    pub fn is_signed_in(&self) -> bool {
        self.auth.is_some()
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        self.auth.as_ref().map(|a| &a.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.auth.as_ref().map(|a| a.token.as_str())
    }

    /// The signed-in user, or [`SessionError::SignedOut`].
    pub fn require_user(&self) -> Result<&CurrentUser, SessionError> {
        self.user().ok_or(SessionError::SignedOut)
    }

    /// Check the local points estimate against a book's price.
    pub fn ensure_points(&self, required: i64) -> Result<(), SessionError> {
        let user = self.require_user()?;
        if user.points < required {
            return Err(SessionError::InsufficientPoints {
                required,
                available: user.points,
            });
        }
        Ok(())
    }

    /// Subtract `points` from the local estimate. No-op when signed out.
    pub fn debit(&mut self, points: i64) {
        if let Some(auth) = self.auth.as_mut() {
            auth.user.points -= points;
        }
    }

    /// Mark a loan request for `book_id` as in flight.
    ///
    /// Fails while a previous request for the same book has not finished.
    pub fn begin_loan_request(&mut self, book_id: i64) -> Result<(), SessionError> {
        self.require_user()?;
        if !self.loans_in_flight.insert(book_id) {
            return Err(SessionError::LoanInFlight { book_id });
        }
        Ok(())
    }

    pub fn finish_loan_request(&mut self, book_id: i64) {
        self.loans_in_flight.remove(&book_id);
    }

    pub fn is_loan_in_flight(&self, book_id: i64) -> bool {
        self.loans_in_flight.contains(&book_id)
    }

    /// Mark the return of `loan_id` as in flight. Same rules as
    /// [`Session::begin_loan_request`].
    pub fn begin_loan_return(&mut self, loan_id: i64) -> Result<(), SessionError> {
        self.require_user()?;
        if !self.returns_in_flight.insert(loan_id) {
            return Err(SessionError::ReturnInFlight { loan_id });
        }
        Ok(())
    }

    pub fn finish_loan_return(&mut self, loan_id: i64) {
        self.returns_in_flight.remove(&loan_id);
    }

    pub fn is_return_in_flight(&self, loan_id: i64) -> bool {
        self.returns_in_flight.contains(&loan_id)
    }
}
