//! The single message modal. Every success and failure message ends up here.

use dioxus::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    message: Option<String>,
}

impl ModalState {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }

    /// Open with `message`, replacing whatever was showing.
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn close(&mut self) {
        self.message = None;
    }
}

pub fn use_modal() -> Signal<ModalState> {
    use_context::<Signal<ModalState>>()
}

pub fn show_message(modal: &mut Signal<ModalState>, message: impl Into<String>) {
    modal.write().show(message);
}

/// `#modal`: a full-screen backdrop around the message card. Clicking the
/// backdrop or `#modal-close` closes it; clicks inside the card do not.
/// The message is rendered as text, never as markup.
#[component]
pub fn Modal() -> Element {
    let mut modal = use_modal();
    let state = modal();
    let text = state.message().unwrap_or_default().to_string();

    rsx! {
        div {
            id: "modal",
            class: if state.is_open() { "modal active" } else { "modal" },
            onclick: move |_| modal.write().close(),
            div {
                class: "modal-content",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                span {
                    id: "modal-close",
                    class: "close",
                    onclick: move |_| modal.write().close(),
                    "×"
                }
                p { id: "modal-message", "{text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let state = ModalState::default();
        assert!(!state.is_open());
        assert_eq!(state.message(), None);
    }

    #[test]
    fn test_show_replaces_message() {
        let mut state = ModalState::default();
        state.show("Livro cadastrado com sucesso!");
        state.show("Falha no Login: Credenciais inválidas.");
        assert!(state.is_open());
        assert_eq!(state.message(), Some("Falha no Login: Credenciais inválidas."));
    }

    #[test]
    fn test_close() {
        let mut state = ModalState::default();
        state.show("<b>x</b>");
        state.close();
        assert!(!state.is_open());
    }
}
