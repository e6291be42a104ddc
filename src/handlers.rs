pub mod empresa;
pub mod estoque;
pub mod resposta;
