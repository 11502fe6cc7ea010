mod auth_screen;
pub use auth_screen::AuthScreen;

mod main_screen;
pub use main_screen::MainScreen;

mod available_books;
pub use available_books::AvailableBooksTab;

mod my_books;
pub use my_books::MyBooksTab;

mod add_book;
pub use add_book::AddBookTab;

mod my_loans;
pub use my_loans::MyLoansTab;
