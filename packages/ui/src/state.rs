//! Shared application state and the hooks that read it.
//!
//! [`LendingProvider`] owns one signal per concern and puts each in context.
//! Components never keep their own copy of the session or the active tab.

use api::{ApiClient, ApiSettings, ClientState};
use dioxus::prelude::*;
use store::{Load, Navigation, Session};

use crate::modal::ModalState;

/// The signed-in user and token, or nothing.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Which screen, auth form and tab are showing.
pub fn use_navigation() -> Signal<Navigation> {
    use_context::<Signal<Navigation>>()
}

/// The gateway every flow goes through.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// The reload generation of one list.
///
/// Memoized so a list wakes up only when its own counter moves, not on every
/// tab switch or sign-out.
pub fn use_reload_generation(load: Load) -> Memo<u64> {
    let navigation = use_navigation();
    use_memo(move || navigation.read().reloads().get(load))
}

/// Session and navigation signals, handed to the loan flows as their
/// [`ClientState`].
#[derive(Clone, Copy)]
pub struct ClientSignals {
    session: Signal<Session>,
    navigation: Signal<Navigation>,
}

impl ClientState for ClientSignals {
    fn session(&self) -> Session {
        self.session.peek().clone()
    }

    fn update_session<R>(&mut self, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut session = self.session.write();
        f(&mut *session)
    }

    fn reload(&mut self, load: Load) {
        self.navigation.write().reload(load);
    }
}

pub fn use_client_state() -> ClientSignals {
    ClientSignals {
        session: use_session(),
        navigation: use_navigation(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings() -> ApiSettings {
    ApiSettings::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid API settings, using defaults");
        ApiSettings::default()
    })
}

#[cfg(target_arch = "wasm32")]
fn load_settings() -> ApiSettings {
    ApiSettings::default()
}

/// Provider component for the session, navigation, modal and API client.
/// Wrap the app with this component before rendering any screen.
#[component]
pub fn LendingProvider(children: Element) -> Element {
    let session = use_signal(Session::new);
    let navigation = use_signal(Navigation::new);
    let modal = use_signal(ModalState::default);

    use_context_provider(|| session);
    use_context_provider(|| navigation);
    use_context_provider(|| modal);
    use_context_provider(|| {
        let settings = load_settings();
        tracing::info!(base_url = settings.base_url(), "using lending API");
        ApiClient::new(&settings)
    });

    rsx! {
        {children}
    }
}
