use api::flows;
use dioxus::prelude::*;
use store::{messages, NewBook, Tab};

use crate::modal::{show_message, use_modal};
use crate::state::{use_api, use_navigation, use_session};

/// Blank or non-numeric points are refused before any request.
fn parse_points(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

#[component]
pub fn AddBookTab() -> Element {
    let client = use_api();
    let session = use_session();
    let mut navigation = use_navigation();
    let mut modal = use_modal();
    let mut title = use_signal(String::new);
    let mut author = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut points = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(points_required) = parse_points(&points()) else {
            show_message(&mut modal, messages::add_book_failed("pontos inválidos"));
            return;
        };
        let book = NewBook {
            title: title(),
            author: author(),
            description: description(),
            points_required,
        };
        let client = client.clone();
        spawn(async move {
            let snapshot = session.peek().clone();
            match flows::add_book(&client, &snapshot, &book).await {
                Ok(_) => {
                    show_message(&mut modal, messages::BOOK_ADDED);
                    title.set(String::new());
                    author.set(String::new());
                    description.set(String::new());
                    points.set(String::new());
                    navigation.write().switch_tab(Tab::MyBooks);
                }
                Err(e) => {
                    tracing::error!("Failed to add book: {}", e);
                    show_message(&mut modal, messages::add_book_failed(&e));
                }
            }
        });
    };

    rsx! {
        h2 { "Cadastrar Livro" }
        form {
            id: "form-add-book",
            class: "book-form",
            onsubmit: handle_submit,
            input {
                id: "book-title",
                r#type: "text",
                placeholder: "Título",
                required: true,
                value: title(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }
            input {
                id: "book-author",
                r#type: "text",
                placeholder: "Autor",
                required: true,
                value: author(),
                oninput: move |evt: FormEvent| author.set(evt.value()),
            }
            textarea {
                id: "book-description",
                placeholder: "Descrição",
                value: description(),
                oninput: move |evt: FormEvent| description.set(evt.value()),
            }
            input {
                id: "book-points",
                r#type: "number",
                min: "1",
                placeholder: "Pontos necessários",
                required: true,
                value: points(),
                oninput: move |evt: FormEvent| points.set(evt.value()),
            }
            button { class: "btn-primary", r#type: "submit", "Cadastrar Livro" }
        }
    }
}
