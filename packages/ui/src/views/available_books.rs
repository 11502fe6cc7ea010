use api::flows;
use dioxus::prelude::*;
use store::{messages, BookAction, BookCardView, BookQuery, Load};

use crate::confirm::confirm;
use crate::modal::{show_message, use_modal};
use crate::state::{use_api, use_client_state, use_reload_generation, use_session};

/// Every listed book, optionally filtered by title and author. Refetched
/// whenever the tab is entered, a loan is requested or returned, or the
/// filters change.
#[component]
pub fn AvailableBooksTab() -> Element {
    let client = use_api();
    let session = use_session();
    let generation = use_reload_generation(Load::AvailableBooks);
    let modal = use_modal();
    let mut query = use_signal(BookQuery::default);
    let mut title_filter = use_signal(String::new);
    let mut author_filter = use_signal(String::new);

    let books = use_resource(move || {
        let client = client.clone();
        let generation = generation();
        let query = query();
        let mut modal = modal;
        async move {
            let session = session.peek().clone();
            if generation == 0 || !session.is_signed_in() {
                return None;
            }
            match flows::available_books(&client, &session, &query).await {
                Ok(cards) => Some(cards),
                Err(e) => {
                    tracing::error!("Failed to load books: {}", e);
                    show_message(&mut modal, messages::available_books_failed(&e));
                    None
                }
            }
        }
    });

    let search = move |evt: FormEvent| {
        evt.prevent_default();
        query.set(BookQuery::from_input(&title_filter(), &author_filter()));
    };

    rsx! {
        h2 { "Livros Disponíveis" }
        form {
            id: "book-search",
            class: "search-form",
            onsubmit: search,
            input {
                id: "search-title",
                r#type: "search",
                placeholder: "Título",
                value: title_filter(),
                oninput: move |evt: FormEvent| title_filter.set(evt.value()),
            }
            input {
                id: "search-author",
                r#type: "search",
                placeholder: "Autor",
                value: author_filter(),
                oninput: move |evt: FormEvent| author_filter.set(evt.value()),
            }
            button { class: "btn-secondary", r#type: "submit", "Buscar" }
        }
        div {
            id: "books-list",
            class: "books-grid",
            {match books().flatten() {
                Some(cards) if cards.is_empty() => rsx! {
                    p { class: "empty-message", {messages::NO_AVAILABLE_BOOKS} }
                },
                Some(cards) => rsx! {
                    for card in cards {
                        BookCard { key: "{card.book_id}", card: card.clone() }
                    }
                },
                None => rsx! {},
            }}
        }
    }
}

#[component]
fn BookCard(card: BookCardView) -> Element {
    let client = use_api();
    let session = use_session();
    let state = use_client_state();
    let mut modal = use_modal();
    let action = card.action;
    let pending = match action {
        BookAction::Request { book_id, .. } => session.read().is_loan_in_flight(book_id),
        _ => false,
    };

    let request = move |_| {
        let BookAction::Request { book_id, points_required } = action else {
            return;
        };
        let client = client.clone();
        let mut state = state;
        spawn(async move {
            match flows::request_loan_confirmed(&client, &mut state, book_id, points_required, confirm)
                .await
            {
                Ok(Some(_)) => show_message(&mut modal, messages::LOAN_REQUESTED),
                Ok(None) => {}
                Err(e) => {
                    tracing::error!("Loan request failed: {}", e);
                    show_message(&mut modal, e.message());
                }
            }
        });
    };

    rsx! {
        div {
            class: "book-card",
            h3 { "{card.title}" }
            p { strong { "Autor:" } " {card.author}" }
            if let Some(description) = &card.description {
                p { "{description}" }
            }
            p { strong { "Proprietário:" } " {card.owner}" }
            div { class: "book-points", "{card.points}" }
            button {
                class: "btn-primary",
                disabled: !action.is_enabled() || pending,
                onclick: request,
                "{action.label()}"
            }
        }
    }
}
