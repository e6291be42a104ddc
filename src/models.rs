pub mod empresa;
pub mod estoque;
