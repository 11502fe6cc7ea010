//! `#main-screen`: header with the signed-in user, the tab bar and the four
//! tab panes. Only the active pane carries `.active`.

use dioxus::prelude::*;
use store::Tab;

use crate::state::{use_navigation, use_session};
use crate::views::{AddBookTab, AvailableBooksTab, MyBooksTab, MyLoansTab};

#[component]
pub fn MainScreen() -> Element {
    let navigation = use_navigation();
    let is_main = navigation.read().is_main();

    rsx! {
        div {
            id: "main-screen",
            class: if is_main { "screen active" } else { "screen" },
            Header {}
            TabBar {}
            main {
                class: "tab-panes",
                TabPane { tab: Tab::BooksAvailable, AvailableBooksTab {} }
                TabPane { tab: Tab::MyBooks, MyBooksTab {} }
                TabPane { tab: Tab::AddBook, AddBookTab {} }
                TabPane { tab: Tab::MyLoans, MyLoansTab {} }
            }
        }
    }
}

#[component]
fn Header() -> Element {
    let mut session = use_session();
    let mut navigation = use_navigation();
    let (email, points) = match session.read().user() {
        Some(user) => (user.email.clone(), user.points.to_string()),
        None => (String::new(), String::new()),
    };

    let logout = move |_| {
        session.write().sign_out();
        navigation.write().sign_out();
        tracing::info!("logged out");
    };

    rsx! {
        header {
            class: "app-header",
            h1 { "📚 Troca de Livros" }
            div {
                class: "user-info",
                span { id: "user-email", "{email}" }
                span { class: "points", "⭐ " span { id: "user-points", "{points}" } " pontos" }
                button { id: "logout-btn", class: "btn-secondary", onclick: logout, "Sair" }
            }
        }
    }
}

#[component]
fn TabBar() -> Element {
    let mut navigation = use_navigation();

    rsx! {
        nav {
            class: "tabs",
            for tab in Tab::ALL {
                button {
                    key: "{tab.id()}",
                    class: if navigation.read().is_tab_active(tab) { "tab-btn active" } else { "tab-btn" },
                    "data-tab": tab.id(),
                    onclick: move |_| {
                        navigation.write().switch_tab(tab);
                    },
                    "{tab.label()}"
                }
            }
        }
    }
}

#[component]
fn TabPane(tab: Tab, children: Element) -> Element {
    let navigation = use_navigation();
    let active = navigation.read().is_tab_active(tab);

    rsx! {
        section {
            id: tab.id(),
            class: if active { "tab-content active" } else { "tab-content" },
            {children}
        }
    }
}
