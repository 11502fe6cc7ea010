pub mod messages;
pub mod models;
pub mod navigation;
pub mod session;
pub mod views;

pub use models::{
    AccessToken, Book, BookQuery, Credentials, Loan, LoanRequest, LoanStatus, NewBook,
    Registration, UserId,
};
pub use navigation::{AuthView, Load, Navigation, Reloads, Screen, Tab};
pub use session::{CurrentUser, Session, SessionError, INITIAL_POINTS};
pub use views::{BookAction, BookCardView, LoanCardView, MyBookCardView};
