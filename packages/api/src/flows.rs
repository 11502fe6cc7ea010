//! # Session-controller flows
//!
//! Each flow is one user action: gateway call(s) plus the client-state
//! transform of the result. Flows take the [`Session`] explicitly and never
//! hold it across an `.await` mutably; they return values the caller applies
//! to its state, so concurrent actions (a double click) observe the same
//! session the UI does.
//!
//! | Flow | Calls | Returns |
//! |------|-------|---------|
//! | [`login`] | `POST /users/login` | a new signed-in [`Session`] |
//! | [`register`] | `POST /users/register` | `()` |
//! | [`available_books`] | `GET /books/` | [`BookCardView`]s |
//! | [`my_books`] | `GET /books/` | [`MyBookCardView`]s owned by the viewer |
//! | [`add_book`] | `POST /books/` | the created [`Book`] |
//! | [`request_loan`] | `POST /loans/request` | the created [`Loan`] |
//! | [`return_loan`] | `POST /loans/{id}/return` | the updated [`Loan`] |
//! | [`my_loans`] | `GET /loans/my_loans` | [`LoanCardView`]s |
//!
//! The two button-driven loan actions also need a confirmation dialog, the
//! in-flight guard and follow-up state changes. [`request_loan_confirmed`]
//! and [`return_loan_confirmed`] run that whole sequence against a
//! [`ClientState`].

use store::views::{available_book_cards, loan_cards, my_book_cards};
use store::{
    messages, Book, BookCardView, BookQuery, Credentials, Load, Loan, LoanCardView,
    MyBookCardView, NewBook, Registration, Session, SessionError,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::{token, ApiClient, ApiError};

fn bearer(session: &Session) -> Result<&str, ApiError> {
    session.token().ok_or(ApiError::Unauthenticated)
}

/// Log in and build the resulting session. The caller's session is untouched
/// on failure.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<Session, ApiError> {
    let credentials = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };
    let access = client.login(&credentials).await.inspect_err(|e| {
        warn!(error = %e, "login failed");
    })?;
    let user_id = token::subject(&access.access_token)?;
    info!(%user_id, "logged in");
    Ok(Session::sign_in(access.access_token, user_id, email.to_string()))
}

pub async fn register(
    client: &ApiClient,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let registration = Registration {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    client.register(&registration).await.inspect_err(|e| {
        warn!(error = %e, "registration failed");
    })?;
    info!("registered new account");
    Ok(())
}

pub async fn available_books(
    client: &ApiClient,
    session: &Session,
    query: &BookQuery,
) -> Result<Vec<BookCardView>, ApiError> {
    let viewer = session.user().ok_or(ApiError::Unauthenticated)?.id;
    let books = client.list_books(query).await?;
    Ok(available_book_cards(&books, viewer))
}

/// The full listing, filtered client-side to the viewer's books.
pub async fn my_books(client: &ApiClient, session: &Session) -> Result<Vec<MyBookCardView>, ApiError> {
    let viewer = session.user().ok_or(ApiError::Unauthenticated)?.id;
    let books = client.list_books(&BookQuery::default()).await?;
    Ok(my_book_cards(&books, viewer))
}

pub async fn add_book(client: &ApiClient, session: &Session, book: &NewBook) -> Result<Book, ApiError> {
    let created = client.create_book(bearer(session)?, book).await?;
    info!(book_id = created.id, "book listed");
    Ok(created)
}

/// Request a loan. Points are not touched here; on success the caller debits
/// `points_required` from its session.
pub async fn request_loan(client: &ApiClient, session: &Session, book_id: i64) -> Result<Loan, ApiError> {
    let loan = client
        .request_loan(bearer(session)?, book_id)
        .await
        .inspect_err(|e| warn!(book_id, error = %e, "loan request failed"))?;
    info!(book_id, loan_id = loan.id, "loan requested");
    Ok(loan)
}

pub async fn return_loan(client: &ApiClient, session: &Session, loan_id: i64) -> Result<Loan, ApiError> {
    let loan = client
        .return_loan(bearer(session)?, loan_id)
        .await
        .inspect_err(|e| warn!(loan_id, error = %e, "loan return failed"))?;
    info!(loan_id, "loan returned");
    Ok(loan)
}

pub async fn my_loans(client: &ApiClient, session: &Session) -> Result<Vec<LoanCardView>, ApiError> {
    let loans = client.my_loans(bearer(session)?).await?;
    Ok(loan_cards(&loans))
}

/// Where the confirmed loan flows read and apply client state. The UI backs
/// it with signals.
pub trait ClientState {
    /// A snapshot of the session.
    fn session(&self) -> Session;

    fn update_session<R>(&mut self, f: impl FnOnce(&mut Session) -> R) -> R;

    /// Ask for a fresh fetch of `load`.
    fn reload(&mut self, load: Load);
}

/// Why a confirmed loan action did not go through.
#[derive(Debug, Error)]
pub enum LoanError {
    /// Refused locally; nothing was sent.
    #[error(transparent)]
    Refused(#[from] SessionError),
    #[error(transparent)]
    Request(ApiError),
    #[error(transparent)]
    Return(ApiError),
}

impl LoanError {
    /// Modal text for this failure.
    pub fn message(&self) -> String {
        match self {
            LoanError::Refused(e) => e.to_string(),
            LoanError::Request(e) => messages::loan_request_failed(e),
            LoanError::Return(e) => messages::loan_return_failed(e),
        }
    }
}

/// Check points, confirm, guard, request. On success the price is debited
/// and the available books reloaded.
///
/// `Ok(None)` means the user declined the confirmation. The guard is
/// released whether or not the request succeeds.
pub async fn request_loan_confirmed<S: ClientState>(
    client: &ApiClient,
    state: &mut S,
    book_id: i64,
    points_required: i64,
    confirm: impl FnOnce(&str) -> bool,
) -> Result<Option<Loan>, LoanError> {
    state.session().ensure_points(points_required)?;
    if !confirm(&messages::confirm_loan(points_required)) {
        return Ok(None);
    }
    state.update_session(|session| session.begin_loan_request(book_id))?;

    let result = request_loan(client, &state.session(), book_id).await;
    state.update_session(|session| session.finish_loan_request(book_id));
    let loan = result.map_err(LoanError::Request)?;

    state.update_session(|session| session.debit(points_required));
    state.reload(Load::AvailableBooks);
    Ok(Some(loan))
}

/// Confirm, guard, return. On success both the loans and the available
/// books are reloaded; points are left for the backend to credit.
pub async fn return_loan_confirmed<S: ClientState>(
    client: &ApiClient,
    state: &mut S,
    loan_id: i64,
    confirm: impl FnOnce(&str) -> bool,
) -> Result<Option<Loan>, LoanError> {
    if !confirm(messages::CONFIRM_RETURN) {
        return Ok(None);
    }
    state.update_session(|session| session.begin_loan_return(loan_id))?;

    let result = return_loan(client, &state.session(), loan_id).await;
    state.update_session(|session| session.finish_loan_return(loan_id));
    let loan = result.map_err(LoanError::Return)?;

    state.reload(Load::MyLoans);
    state.reload(Load::AvailableBooks);
    Ok(Some(loan))
}
