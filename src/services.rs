pub mod empresa_service;
pub mod estoque_service;
