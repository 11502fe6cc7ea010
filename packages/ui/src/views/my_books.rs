use api::flows;
use dioxus::prelude::*;
use store::{messages, Load, MyBookCardView};

use crate::modal::{show_message, use_modal};
use crate::state::{use_api, use_reload_generation, use_session};

#[component]
pub fn MyBooksTab() -> Element {
    let client = use_api();
    let session = use_session();
    let generation = use_reload_generation(Load::MyBooks);
    let modal = use_modal();

    let books = use_resource(move || {
        let client = client.clone();
        let generation = generation();
        let mut modal = modal;
        async move {
            let session = session.peek().clone();
            if generation == 0 || !session.is_signed_in() {
                return None;
            }
            match flows::my_books(&client, &session).await {
                Ok(cards) => Some(cards),
                Err(e) => {
                    tracing::error!("Failed to load own books: {}", e);
                    show_message(&mut modal, messages::my_books_failed(&e));
                    None
                }
            }
        }
    });

    rsx! {
        h2 { "Meus Livros" }
        div {
            id: "my-books-list",
            class: "books-grid",
            {match books().flatten() {
                Some(cards) if cards.is_empty() => rsx! {
                    p { class: "empty-message", {messages::NO_OWN_BOOKS} }
                },
                Some(cards) => rsx! {
                    for card in cards {
                        MyBookCard { key: "{card.book_id}", card: card.clone() }
                    }
                },
                None => rsx! {},
            }}
        }
    }
}

#[component]
fn MyBookCard(card: MyBookCardView) -> Element {
    rsx! {
        div {
            class: "book-card",
            h3 { "{card.title}" }
            p { strong { "Autor:" } " {card.author}" }
            if let Some(description) = &card.description {
                p { "{description}" }
            }
            div { class: "book-points", "{card.points}" }
            p { strong { "Status:" } " {card.status}" }
        }
    }
}
