// src/db/estoque_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::estoque::{DadosEstoque, Estoque},
};

// Acesso à tabela 'estoque'. O serviço depende só deste trait,
// o que permite trocar o Postgres por uma implementação em memória nos testes.
#[async_trait]
pub trait EstoqueRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Estoque>, AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Estoque>, AppError>;

    async fn find_by_empresa(&self, id_empresa: i64) -> Result<Vec<Estoque>, AppError>;

    async fn find_by_produto(&self, id_produto: i32) -> Result<Vec<Estoque>, AppError>;

    async fn find_by_empresa_produto(
        &self,
        id_empresa: i64,
        id_produto: i32,
    ) -> Result<Vec<Estoque>, AppError>;

    async fn insert(&self, dados: &DadosEstoque) -> Result<Estoque, AppError>;

    /// Atualiza o registro `id`. Retorna `None` se ele não existir.
    async fn update(&self, id: i32, dados: &DadosEstoque) -> Result<Option<Estoque>, AppError>;

    async fn exists_by_id(&self, id: i32) -> Result<bool, AppError>;

    /// Remove o registro `id`. Retorna `false` se nenhuma linha foi apagada.
    async fn delete_by_id(&self, id: i32) -> Result<bool, AppError>;
}

#[derive(Clone)]
pub struct PgEstoqueRepository {
    pool: PgPool,
}

impl PgEstoqueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EstoqueRepository for PgEstoqueRepository {
    async fn find_all(&self) -> Result<Vec<Estoque>, AppError> {
        let estoques = sqlx::query_as::<_, Estoque>("SELECT * FROM estoque ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(estoques)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Estoque>, AppError> {
        let estoque = sqlx::query_as::<_, Estoque>("SELECT * FROM estoque WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(estoque)
    }

    async fn find_by_empresa(&self, id_empresa: i64) -> Result<Vec<Estoque>, AppError> {
        let estoques = sqlx::query_as::<_, Estoque>(
            "SELECT * FROM estoque WHERE id_empresa = $1 ORDER BY id ASC",
        )
        .bind(id_empresa)
        .fetch_all(&self.pool)
        .await?;
        Ok(estoques)
    }

    async fn find_by_produto(&self, id_produto: i32) -> Result<Vec<Estoque>, AppError> {
        let estoques = sqlx::query_as::<_, Estoque>(
            "SELECT * FROM estoque WHERE id_produto = $1 ORDER BY id ASC",
        )
        .bind(id_produto)
        .fetch_all(&self.pool)
        .await?;
        Ok(estoques)
    }

    async fn find_by_empresa_produto(
        &self,
        id_empresa: i64,
        id_produto: i32,
    ) -> Result<Vec<Estoque>, AppError> {
        let estoques = sqlx::query_as::<_, Estoque>(
            r#"
            SELECT * FROM estoque
            WHERE id_empresa = $1 AND id_produto = $2
            ORDER BY id ASC
            "#,
        )
        .bind(id_empresa)
        .bind(id_produto)
        .fetch_all(&self.pool)
        .await?;
        Ok(estoques)
    }

    async fn insert(&self, dados: &DadosEstoque) -> Result<Estoque, AppError> {
        let estoque = sqlx::query_as::<_, Estoque>(
            r#"
            INSERT INTO estoque (id_empresa, id_produto, quantidade)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(dados.id_empresa)
        .bind(dados.id_produto)
        .bind(dados.quantidade)
        .fetch_one(&self.pool)
        .await?;
        Ok(estoque)
    }

    async fn update(&self, id: i32, dados: &DadosEstoque) -> Result<Option<Estoque>, AppError> {
        let estoque = sqlx::query_as::<_, Estoque>(
            r#"
            UPDATE estoque
            SET id_empresa = $2,
                id_produto = $3,
                quantidade = $4,
                data_atualizacao = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dados.id_empresa)
        .bind(dados.id_produto)
        .bind(dados.quantidade)
        .fetch_optional(&self.pool)
        .await?;
        Ok(estoque)
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AppError> {
        // SELECT EXISTS só devolve 'true' ou 'false'
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM estoque WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM estoque WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
