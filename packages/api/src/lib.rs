//! # API crate: gateway to the lending backend
//!
//! Everything the UI needs to talk to the REST backend. The `ui` crate never
//! builds a request itself; it calls the [`flows`] here and renders what they
//! return.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one async method per endpoint, bearer auth, JSON in and out |
//! | [`error`] | [`ApiError`] and the four-tier `detail` message extraction |
//! | [`flows`] | Session-controller actions: login, register, book and loan operations |
//! | [`settings`] | [`ApiSettings`]: backend base URL from build env, `lending.toml` or `LENDING_*` |
//! | [`token`] | Decodes the user id (`sub`) from an access token |
//!
//! ## Endpoints
//!
//! | Method | Path | Auth |
//! |--------|------|------|
//! | POST | `/users/register` | none |
//! | POST | `/users/login` | none |
//! | GET | `/books/` | none |
//! | POST | `/books/` | bearer |
//! | POST | `/loans/request` | bearer |
//! | POST | `/loans/{id}/return` | bearer |
//! | POST | `/loans/{id}/confirm` | bearer |
//! | GET | `/loans/my_loans` | bearer |
//! | GET | `/loans/overdue` | none |

pub mod client;
pub mod error;
pub mod flows;
pub mod settings;
pub mod token;

pub use client::ApiClient;
pub use error::{error_message, ApiError};
pub use flows::{ClientState, LoanError};
pub use settings::{ApiSettings, DEFAULT_API_URL};
