//! `#auth-screen`: the login and register forms. Exactly one of them is
//! visible; the other carries `.hidden`.

use api::flows;
use dioxus::prelude::*;
use store::{messages, AuthView};

use crate::modal::{show_message, use_modal};
use crate::state::{use_api, use_navigation, use_session};

#[component]
pub fn AuthScreen() -> Element {
    let navigation = use_navigation();
    let view = navigation.read().auth_view();

    rsx! {
        div {
            id: "auth-screen",
            class: if view.is_some() { "screen active" } else { "screen" },
            div {
                class: "auth-container",
                h1 { "📚 Troca de Livros" }
                LoginForm { hidden: view != Some(AuthView::Login) }
                RegisterForm { hidden: view != Some(AuthView::Register) }
            }
        }
    }
}

#[component]
fn LoginForm(hidden: bool) -> Element {
    let client = use_api();
    let mut session = use_session();
    let mut navigation = use_navigation();
    let mut modal = use_modal();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            match flows::login(&client, &email(), &password()).await {
                Ok(signed_in) => {
                    session.set(signed_in);
                    navigation.write().show_main();
                }
                Err(e) => {
                    tracing::error!("Login failed: {}", e);
                    show_message(&mut modal, messages::login_failed(&e));
                }
            }
        });
    };

    rsx! {
        form {
            id: "login-form",
            class: if hidden { "auth-form hidden" } else { "auth-form" },
            onsubmit: handle_login,
            h2 { "Entrar" }
            input {
                id: "login-email",
                r#type: "email",
                placeholder: "Email",
                required: true,
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            input {
                id: "login-password",
                r#type: "password",
                placeholder: "Senha",
                required: true,
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            button { class: "btn-primary", r#type: "submit", "Entrar" }
            p {
                "Não tem conta? "
                a {
                    id: "show-register-form",
                    href: "#",
                    onclick: move |evt: Event<MouseData>| {
                        evt.prevent_default();
                        navigation.write().show_register();
                    },
                    "Cadastre-se"
                }
            }
        }
    }
}

#[component]
fn RegisterForm(hidden: bool) -> Element {
    let client = use_api();
    let mut navigation = use_navigation();
    let mut modal = use_modal();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            match flows::register(&client, &name(), &email(), &password()).await {
                Ok(()) => {
                    show_message(&mut modal, messages::REGISTERED);
                    name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    navigation.write().show_auth();
                }
                Err(e) => {
                    tracing::error!("Registration failed: {}", e);
                    show_message(&mut modal, messages::register_failed(&e));
                }
            }
        });
    };

    rsx! {
        form {
            id: "register-form",
            class: if hidden { "auth-form hidden" } else { "auth-form" },
            onsubmit: handle_register,
            h2 { "Cadastro" }
            input {
                id: "register-name",
                r#type: "text",
                placeholder: "Nome",
                required: true,
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            input {
                id: "register-email",
                r#type: "email",
                placeholder: "Email",
                required: true,
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            input {
                id: "register-password",
                r#type: "password",
                placeholder: "Senha",
                required: true,
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            button { class: "btn-primary", r#type: "submit", "Cadastrar" }
            p {
                "Já tem conta? "
                a {
                    id: "show-login-form",
                    href: "#",
                    onclick: move |evt: Event<MouseData>| {
                        evt.prevent_default();
                        navigation.write().show_login();
                    },
                    "Entrar"
                }
            }
        }
    }
}
