pub mod estoque_repo;
pub use estoque_repo::{EstoqueRepository, PgEstoqueRepository};
pub mod empresa_repo;
pub use empresa_repo::{EmpresaRepository, PgEmpresaRepository};

#[cfg(test)]
pub mod memoria;
