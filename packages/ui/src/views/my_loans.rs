use api::flows;
use dioxus::prelude::*;
use store::{messages, Load, LoanCardView};

use crate::confirm::confirm;
use crate::modal::{show_message, use_modal};
use crate::state::{use_api, use_client_state, use_reload_generation, use_session};

#[component]
pub fn MyLoansTab() -> Element {
    let client = use_api();
    let session = use_session();
    let generation = use_reload_generation(Load::MyLoans);
    let modal = use_modal();

    let loans = use_resource(move || {
        let client = client.clone();
        let generation = generation();
        let mut modal = modal;
        async move {
            let session = session.peek().clone();
            if generation == 0 || !session.is_signed_in() {
                return None;
            }
            match flows::my_loans(&client, &session).await {
                Ok(cards) => Some(cards),
                Err(e) => {
                    tracing::error!("Failed to load loans: {}", e);
                    show_message(&mut modal, messages::loans_failed(&e));
                    None
                }
            }
        }
    });

    rsx! {
        h2 { "Meus Empréstimos" }
        div {
            id: "loans-list",
            class: "books-grid",
            {match loans().flatten() {
                Some(cards) if cards.is_empty() => rsx! {
                    p { class: "empty-message", {messages::NO_LOANS} }
                },
                Some(cards) => rsx! {
                    for card in cards {
                        LoanCard { key: "{card.loan_id}", card: card.clone() }
                    }
                },
                None => rsx! {},
            }}
        }
    }
}

#[component]
fn LoanCard(card: LoanCardView) -> Element {
    let client = use_api();
    let session = use_session();
    let state = use_client_state();
    let mut modal = use_modal();
    let loan_id = card.loan_id;
    let pending = session.read().is_return_in_flight(loan_id);

    let return_loan = move |_| {
        let client = client.clone();
        let mut state = state;
        spawn(async move {
            match flows::return_loan_confirmed(&client, &mut state, loan_id, confirm).await {
                Ok(Some(_)) => show_message(&mut modal, messages::LOAN_RETURNED),
                Ok(None) => {}
                Err(e) => {
                    tracing::error!("Loan return failed: {}", e);
                    show_message(&mut modal, e.message());
                }
            }
        });
    };

    rsx! {
        div {
            class: "book-card",
            h3 { "{card.heading}" }
            p { strong { "Status:" } " {card.status}" }
            p { strong { "Data de Início:" } " {card.start_date}" }
            p { strong { "Data de Devolução:" } " {card.due_date}" }
            if let Some(returned) = &card.returned_date {
                p { strong { "Devolvido em:" } " {returned}" }
            }
            if card.can_return {
                button {
                    class: "btn-secondary",
                    disabled: pending,
                    onclick: return_loan,
                    "Devolver Livro"
                }
            }
        }
    }
}
