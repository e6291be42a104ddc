// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::{EmpresaRepository, EstoqueRepository, PgEmpresaRepository, PgEstoqueRepository},
    services::{empresa_service::EmpresaService, estoque_service::EstoqueService},
};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 3;

// Configuração lida das variáveis de ambiente (ou do .env)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Monta a configuração a partir de uma função de busca,
    /// para não depender do ambiente do processo.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        let server_addr = lookup("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS inválido: '{v}'"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let acquire_timeout_secs = match lookup("DB_ACQUIRE_TIMEOUT_SECS") {
            Some(v) => v
                .parse()
                .with_context(|| format!("DB_ACQUIRE_TIMEOUT_SECS inválido: '{v}'"))?,
            None => DEFAULT_ACQUIRE_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url,
            server_addr,
            db_max_connections,
            db_acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }

    pub async fn connect(&self) -> anyhow::Result<PgPool> {
        let db_pool = PgPoolOptions::new()
            .max_connections(self.db_max_connections)
            .acquire_timeout(self.db_acquire_timeout)
            .connect(&self.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
        Ok(db_pool)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub estoque_service: EstoqueService,
    pub empresa_service: EmpresaService,
}

impl AppState {
    pub fn new(db_pool: PgPool) -> Self {
        // --- Monta o gráfico de dependências ---
        Self::with_repositories(
            Arc::new(PgEstoqueRepository::new(db_pool.clone())),
            Arc::new(PgEmpresaRepository::new(db_pool)),
        )
    }

    pub fn with_repositories(
        estoque_repo: Arc<dyn EstoqueRepository>,
        empresa_repo: Arc<dyn EmpresaRepository>,
    ) -> Self {
        Self {
            estoque_service: EstoqueService::new(estoque_repo),
            empresa_service: EmpresaService::new(empresa_repo),
        }
    }
}
