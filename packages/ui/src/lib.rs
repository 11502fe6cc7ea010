//! This crate contains all UI for the lending client.
//!
//! [`LendingApp`] renders both screens and the modal at once; which of them
//! is visible is decided by `.active`/`.hidden` classes driven from the
//! [`store::Navigation`] signal, so the DOM ids stay stable for interface
//! tests. It must be rendered inside a [`LendingProvider`].

use dioxus::prelude::*;

pub mod views;
use views::{AuthScreen, MainScreen};

mod state;
pub use state::{
    use_api, use_client_state, use_navigation, use_reload_generation, use_session, ClientSignals,
    LendingProvider,
};

mod modal;
pub use modal::{show_message, use_modal, Modal, ModalState};

mod confirm;
pub use confirm::confirm;

#[component]
pub fn LendingApp() -> Element {
    rsx! {
        div {
            class: "container",
            AuthScreen {}
            MainScreen {}
        }
        Modal {}
    }
}
