// src/services/estoque_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::EstoqueRepository,
    models::estoque::{DadosEstoque, Estoque},
};

#[derive(Clone)]
pub struct EstoqueService {
    estoque_repo: Arc<dyn EstoqueRepository>,
}

impl EstoqueService {
    pub fn new(estoque_repo: Arc<dyn EstoqueRepository>) -> Self {
        Self { estoque_repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Estoque>, AppError> {
        self.estoque_repo.find_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Estoque>, AppError> {
        self.estoque_repo.find_by_id(id).await
    }

    /// Estoques de uma empresa. Uma empresa sem nenhum registro é informada
    /// como `None` (lista ausente), não como lista vazia.
    pub async fn get_by_empresa(&self, id_empresa: i64) -> Result<Option<Vec<Estoque>>, AppError> {
        let estoques = self.estoque_repo.find_by_empresa(id_empresa).await?;
        Ok(Some(estoques).filter(|lista| !lista.is_empty()))
    }

    pub async fn get_by_produto(&self, id_produto: i32) -> Result<Vec<Estoque>, AppError> {
        self.estoque_repo.find_by_produto(id_produto).await
    }

    pub async fn get_by_empresa_produto(
        &self,
        id_empresa: i64,
        id_produto: i32,
    ) -> Result<Vec<Estoque>, AppError> {
        self.estoque_repo
            .find_by_empresa_produto(id_empresa, id_produto)
            .await
    }

    // --- SAVE (cria ou atualiza) ---
    // Um id que não existe no banco não é reaproveitado: vira um registro novo.
    pub async fn save(&self, id: Option<i32>, dados: DadosEstoque) -> Result<Estoque, AppError> {
        if let Some(id) = id {
            if let Some(atualizado) = self.estoque_repo.update(id, &dados).await? {
                tracing::debug!("Estoque {} atualizado", id);
                return Ok(atualizado);
            }
        }

        let novo = self.estoque_repo.insert(&dados).await?;
        tracing::debug!("Estoque {} criado", novo.id);
        Ok(novo)
    }

    /// Remove o registro. Retorna `false` se ele não existir,
    /// inclusive quando outra requisição o apagou depois da checagem.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        if !self.estoque_repo.exists_by_id(id).await? {
            return Ok(false);
        }
        self.estoque_repo.delete_by_id(id).await
    }
}
