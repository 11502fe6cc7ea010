//! # Screen and tab controller
//!
//! The client shows exactly one of two screens. The auth screen shows either
//! the login or the register form; the main screen shows exactly one of four
//! tabs. [`Navigation`] is that state machine.
//!
//! Tabs backed by the network ([`Tab::load`]) are re-fetched every time they
//! are activated. Rather than performing the fetch itself, the controller
//! bumps a per-list generation counter in [`Reloads`]; views watch their
//! counter and fetch when it changes. A counter of `0` means the list has
//! never been requested and must not be fetched.

/// The two top-level screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Auth(AuthView),
    Main(Tab),
}

/// Which form the auth screen shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthView {
    Login,
    Register,
}

/// Tabs of the main screen, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    BooksAvailable,
    MyBooks,
    AddBook,
    MyLoans,
}

/// A list that has to be fetched from the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Load {
    AvailableBooks,
    MyBooks,
    MyLoans,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::BooksAvailable, Tab::MyBooks, Tab::AddBook, Tab::MyLoans];

    /// DOM id of the tab pane, also used as the `data-tab` value.
    pub fn id(self) -> &'static str {
        match self {
            Tab::BooksAvailable => "books-available",
            Tab::MyBooks => "my-books",
            Tab::AddBook => "add-book",
            Tab::MyLoans => "my-loans",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::BooksAvailable => "Livros Disponíveis",
            Tab::MyBooks => "Meus Livros",
            Tab::AddBook => "Cadastrar Livro",
            Tab::MyLoans => "Meus Empréstimos",
        }
    }

    /// The list fetched when this tab is activated, if any.
    pub fn load(self) -> Option<Load> {
        match self {
            Tab::BooksAvailable => Some(Load::AvailableBooks),
            Tab::MyBooks => Some(Load::MyBooks),
            Tab::AddBook => None,
            Tab::MyLoans => Some(Load::MyLoans),
        }
    }
}

/// Generation counters, one per fetched list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reloads {
    pub available_books: u64,
    pub my_books: u64,
    pub my_loans: u64,
}

impl Reloads {
    pub fn get(&self, load: Load) -> u64 {
        match load {
            Load::AvailableBooks => self.available_books,
            Load::MyBooks => self.my_books,
            Load::MyLoans => self.my_loans,
        }
    }

    fn bump(&mut self, load: Load) {
        let counter = match load {
            Load::AvailableBooks => &mut self.available_books,
            Load::MyBooks => &mut self.my_books,
            Load::MyLoans => &mut self.my_loans,
        };
        *counter += 1;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Navigation {
    screen: Screen,
    reloads: Reloads,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            screen: Screen::Auth(AuthView::Login),
            reloads: Reloads::default(),
        }
    }
}

impl Navigation {
    /// Boot state: auth screen, login form.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn reloads(&self) -> Reloads {
        self.reloads
    }

    pub fn is_auth(&self) -> bool {
        matches!(self.screen, Screen::Auth(_))
    }

    pub fn is_main(&self) -> bool {
        matches!(self.screen, Screen::Main(_))
    }

    /// Auth sub-view, or `None` on the main screen.
    pub fn auth_view(&self) -> Option<AuthView> {
        match self.screen {
            Screen::Auth(view) => Some(view),
            Screen::Main(_) => None,
        }
    }

    /// Active tab, or `None` on the auth screen.
    pub fn active_tab(&self) -> Option<Tab> {
        match self.screen {
            Screen::Main(tab) => Some(tab),
            Screen::Auth(_) => None,
        }
    }

    pub fn is_tab_active(&self, tab: Tab) -> bool {
        self.active_tab() == Some(tab)
    }

    /// Go to the auth screen with the login form showing.
    pub fn show_auth(&mut self) {
        self.screen = Screen::Auth(AuthView::Login);
    }

    /// Swap the login form for the register form. Ignored on the main screen.
    pub fn show_register(&mut self) {
        if self.is_auth() {
            self.screen = Screen::Auth(AuthView::Register);
        }
    }

    /// Swap the register form for the login form. Ignored on the main screen.
    pub fn show_login(&mut self) {
        if self.is_auth() {
            self.screen = Screen::Auth(AuthView::Login);
        }
    }

    /// Enter the main screen on the available-books tab.
    pub fn show_main(&mut self) -> Option<Load> {
        self.screen = Screen::Main(Tab::BooksAvailable);
        self.activate(Tab::BooksAvailable)
    }

    /// Activate `tab`, requesting a fresh load when the tab has one.
    ///
    /// Only meaningful on the main screen; returns `None` otherwise.
    pub fn switch_tab(&mut self, tab: Tab) -> Option<Load> {
        if !self.is_main() {
            return None;
        }
        self.screen = Screen::Main(tab);
        self.activate(tab)
    }

    /// Request a fresh fetch of `load` without changing the active tab.
    pub fn reload(&mut self, load: Load) {
        self.reloads.bump(load);
    }

    /// Leave the main screen: back to the login form.
    pub fn sign_out(&mut self) {
        self.show_auth();
    }

    fn activate(&mut self, tab: Tab) -> Option<Load> {
        let load = tab.load();
        if let Some(load) = load {
            self.reloads.bump(load);
        }
        load
    }
}
