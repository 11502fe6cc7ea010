//! User-facing texts shown in the modal and in empty lists.

use std::fmt::Display;

pub const REGISTERED: &str = "Registro realizado com sucesso! Faça login para continuar.";
pub const BOOK_ADDED: &str = "Livro cadastrado com sucesso!";
pub const LOAN_REQUESTED: &str =
    "Empréstimo solicitado com sucesso! Seu saldo será atualizado após a confirmação.";
pub const LOAN_RETURNED: &str = "Livro devolvido com sucesso! Seu saldo de pontos será reajustado.";

pub const NO_AVAILABLE_BOOKS: &str = "Nenhum livro disponível no momento.";
pub const NO_OWN_BOOKS: &str = "Você ainda não cadastrou nenhum livro.";
pub const NO_LOANS: &str = "Você não possui empréstimos ativos ou no histórico.";

pub const CONFIRM_RETURN: &str = "Tem certeza que deseja devolver este livro?";

pub fn confirm_loan(points_required: i64) -> String {
    format!("Deseja pegar este livro emprestado por {points_required} pontos?")
}

pub fn login_failed(err: impl Display) -> String {
    format!("Falha no Login: {err}")
}

pub fn register_failed(err: impl Display) -> String {
    format!("Falha no Cadastro: {err}")
}

pub fn available_books_failed(err: impl Display) -> String {
    format!("Erro ao carregar livros disponíveis: {err}")
}

pub fn my_books_failed(err: impl Display) -> String {
    format!("Erro ao carregar seus livros: {err}")
}

pub fn add_book_failed(err: impl Display) -> String {
    format!("Falha ao cadastrar livro: {err}")
}

pub fn loan_request_failed(err: impl Display) -> String {
    format!("Falha ao solicitar empréstimo: {err}")
}

pub fn loan_return_failed(err: impl Display) -> String {
    format!("Falha ao devolver livro: {err}")
}

pub fn loans_failed(err: impl Display) -> String {
    format!("Falha ao carregar empréstimos: {err}")
}
