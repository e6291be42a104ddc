// src/db/empresa_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::empresa::{DadosEmpresa, Empresa},
};

#[async_trait]
pub trait EmpresaRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Empresa>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Empresa>, AppError>;

    async fn insert(&self, dados: &DadosEmpresa) -> Result<Empresa, AppError>;

    /// Atualiza a empresa `id`. Retorna `None` se ela não existir.
    async fn update(&self, id: i64, dados: &DadosEmpresa) -> Result<Option<Empresa>, AppError>;
}

#[derive(Clone)]
pub struct PgEmpresaRepository {
    pool: PgPool,
}

impl PgEmpresaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmpresaRepository for PgEmpresaRepository {
    async fn find_all(&self) -> Result<Vec<Empresa>, AppError> {
        let empresas =
            sqlx::query_as::<_, Empresa>("SELECT * FROM empresa ORDER BY nome_fantasia ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(empresas)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Empresa>, AppError> {
        let empresa = sqlx::query_as::<_, Empresa>("SELECT * FROM empresa WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(empresa)
    }

    async fn insert(&self, dados: &DadosEmpresa) -> Result<Empresa, AppError> {
        let empresa = sqlx::query_as::<_, Empresa>(
            r#"
            INSERT INTO empresa (nome_fantasia, razao_social, cnpj, data_entrada, ativo)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&dados.nome_fantasia)
        .bind(&dados.razao_social)
        .bind(&dados.cnpj)
        .bind(dados.data_entrada)
        .bind(dados.ativo)
        .fetch_one(&self.pool)
        .await?;
        Ok(empresa)
    }

    async fn update(&self, id: i64, dados: &DadosEmpresa) -> Result<Option<Empresa>, AppError> {
        let empresa = sqlx::query_as::<_, Empresa>(
            r#"
            UPDATE empresa
            SET nome_fantasia = $2,
                razao_social = $3,
                cnpj = $4,
                data_entrada = $5,
                ativo = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&dados.nome_fantasia)
        .bind(&dados.razao_social)
        .bind(&dados.cnpj)
        .bind(dados.data_entrada)
        .bind(dados.ativo)
        .fetch_optional(&self.pool)
        .await?;
        Ok(empresa)
    }
}
