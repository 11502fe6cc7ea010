//! # View models for book and loan cards
//!
//! Pure functions from API responses to what a card displays. The `ui` crate
//! renders these one-to-one, so every labelling and filtering rule lives here
//! and is testable without a browser.
//!
//! | Builder | Tab | Rule |
//! |---------|-----|------|
//! | [`available_book_cards`] | books-available | One card per book; the action depends on ownership and availability. |
//! | [`my_book_cards`] | my-books | Only books whose `owner_id` is the viewer. |
//! | [`loan_cards`] | my-loans | Status label per state; only active loans can be returned. |

use crate::models::{Book, Loan, LoanStatus, UserId};

/// What the button on an available-book card does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookAction {
    /// Enabled; requests a loan for the book.
    Request { book_id: i64, points_required: i64 },
    /// Disabled; the viewer owns the book.
    Owned,
    /// Disabled; someone else has it.
    Lent,
}

impl BookAction {
    pub fn label(self) -> &'static str {
        match self {
            BookAction::Request { .. } => "Pegar Emprestado",
            BookAction::Owned => "Seu Livro",
            BookAction::Lent => "Emprestado",
        }
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, BookAction::Request { .. })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookCardView {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub owner: String,
    pub points: String,
    pub action: BookAction,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MyBookCardView {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub points: String,
    pub status: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoanCardView {
    pub loan_id: i64,
    pub heading: String,
    pub status: &'static str,
    pub start_date: String,
    pub due_date: String,
    pub returned_date: Option<String>,
    /// Only active loans offer the return button.
    pub can_return: bool,
}

const NOT_AVAILABLE: &str = "N/A";

fn points_label(points: i64) -> String {
    format!("⭐ {points} pontos")
}

fn description(book: &Book) -> Option<String> {
    book.description.clone().filter(|d| !d.is_empty())
}

pub fn status_label(status: LoanStatus) -> &'static str {
    match status {
        LoanStatus::Active => "Empréstimo Ativo",
        LoanStatus::Returned => "Devolvido",
        LoanStatus::Requested => "Pendente de Confirmação",
        LoanStatus::Unknown => "",
    }
}

pub fn book_action(book: &Book, viewer: UserId) -> BookAction {
    if book.is_owned_by(viewer) {
        BookAction::Owned
    } else if !book.available {
        BookAction::Lent
    } else {
        BookAction::Request {
            book_id: book.id,
            points_required: book.points_required,
        }
    }
}

pub fn available_book_cards(books: &[Book], viewer: UserId) -> Vec<BookCardView> {
    books
        .iter()
        .map(|book| BookCardView {
            book_id: book.id,
            title: book.title.clone(),
            author: book.author.clone().unwrap_or_default(),
            description: description(book),
            owner: if book.is_owned_by(viewer) {
                "Você".to_string()
            } else {
                book.owner_id.to_string()
            },
            points: points_label(book.points_required),
            action: book_action(book, viewer),
        })
        .collect()
}

pub fn my_book_cards(books: &[Book], viewer: UserId) -> Vec<MyBookCardView> {
    books
        .iter()
        .filter(|book| book.is_owned_by(viewer))
        .map(|book| MyBookCardView {
            book_id: book.id,
            title: book.title.clone(),
            author: book.author.clone().unwrap_or_default(),
            description: description(book),
            points: points_label(book.points_required),
            status: if book.available {
                "✅ Disponível"
            } else {
                "🔒 Emprestado"
            },
        })
        .collect()
}

pub fn loan_cards(loans: &[Loan]) -> Vec<LoanCardView> {
    loans
        .iter()
        .map(|loan| LoanCardView {
            loan_id: loan.id,
            heading: format!("Livro ID: {}", loan.book_id),
            status: status_label(loan.status),
            start_date: loan.start_date.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            due_date: loan.due_date.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            returned_date: loan.returned_date.clone(),
            can_return: loan.status == LoanStatus::Active,
        })
        .collect()
}
