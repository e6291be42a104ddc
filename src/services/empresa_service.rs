// src/services/empresa_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::EmpresaRepository,
    models::empresa::{DadosEmpresa, Empresa},
};

#[derive(Clone)]
pub struct EmpresaService {
    empresa_repo: Arc<dyn EmpresaRepository>,
}

impl EmpresaService {
    pub fn new(empresa_repo: Arc<dyn EmpresaRepository>) -> Self {
        Self { empresa_repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Empresa>, AppError> {
        self.empresa_repo.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Empresa>, AppError> {
        self.empresa_repo.find_by_id(id).await
    }

    pub async fn save(&self, id: Option<i64>, dados: DadosEmpresa) -> Result<Empresa, AppError> {
        if let Some(id) = id {
            if let Some(atualizada) = self.empresa_repo.update(id, &dados).await? {
                return Ok(atualizada);
            }
        }
        self.empresa_repo.insert(&dados).await
    }
}
