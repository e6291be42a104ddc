// src/db/memoria.rs
//
// Repositórios em memória usados pelos testes de serviço e de handler.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    common::error::AppError,
    db::{EmpresaRepository, EstoqueRepository},
    models::{
        empresa::{DadosEmpresa, Empresa},
        estoque::{DadosEstoque, Estoque},
    },
};

fn banco_fora() -> AppError {
    AppError::InternalServerError(anyhow::anyhow!("banco de dados indisponível"))
}

#[derive(Default)]
pub struct EstoqueEmMemoria {
    registros: Mutex<Vec<Estoque>>,
    falhar: bool,
    existencia_desatualizada: bool,
}

impl EstoqueEmMemoria {
    pub fn com_registros(registros: Vec<Estoque>) -> Self {
        Self {
            registros: Mutex::new(registros),
            ..Self::default()
        }
    }

    /// Toda chamada devolve erro, como se o banco estivesse fora do ar.
    pub fn falhando() -> Self {
        Self {
            falhar: true,
            ..Self::default()
        }
    }

    /// `exists_by_id` passa a responder sempre `true`, como quando outra
    /// requisição apaga o registro entre a checagem e o DELETE.
    pub fn com_existencia_desatualizada(self) -> Self {
        Self {
            existencia_desatualizada: true,
            ..self
        }
    }

    pub fn registros(&self) -> Vec<Estoque> {
        self.registros.lock().unwrap().clone()
    }

    fn filtrar(&self, filtro: impl Fn(&Estoque) -> bool) -> Result<Vec<Estoque>, AppError> {
        if self.falhar {
            return Err(banco_fora());
        }
        Ok(self
            .registros
            .lock()
            .unwrap()
            .iter()
            .filter(|e| filtro(e))
            .cloned()
            .collect())
    }
}

pub fn estoque(id: i32, id_empresa: i64, id_produto: i32, quantidade: i64) -> Estoque {
    Estoque {
        id,
        id_empresa,
        id_produto,
        quantidade: quantidade.into(),
        data_atualizacao: Utc::now(),
    }
}

#[async_trait]
impl EstoqueRepository for EstoqueEmMemoria {
    async fn find_all(&self) -> Result<Vec<Estoque>, AppError> {
        self.filtrar(|_| true)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Estoque>, AppError> {
        Ok(self.filtrar(|e| e.id == id)?.into_iter().next())
    }

    async fn find_by_empresa(&self, id_empresa: i64) -> Result<Vec<Estoque>, AppError> {
        self.filtrar(|e| e.id_empresa == id_empresa)
    }

    async fn find_by_produto(&self, id_produto: i32) -> Result<Vec<Estoque>, AppError> {
        self.filtrar(|e| e.id_produto == id_produto)
    }

    async fn find_by_empresa_produto(
        &self,
        id_empresa: i64,
        id_produto: i32,
    ) -> Result<Vec<Estoque>, AppError> {
        self.filtrar(|e| e.id_empresa == id_empresa && e.id_produto == id_produto)
    }

    async fn insert(&self, dados: &DadosEstoque) -> Result<Estoque, AppError> {
        if self.falhar {
            return Err(banco_fora());
        }
        let mut registros = self.registros.lock().unwrap();
        let id = registros.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let novo = Estoque {
            id,
            id_empresa: dados.id_empresa,
            id_produto: dados.id_produto,
            quantidade: dados.quantidade,
            data_atualizacao: Utc::now(),
        };
        registros.push(novo.clone());
        Ok(novo)
    }

    async fn update(&self, id: i32, dados: &DadosEstoque) -> Result<Option<Estoque>, AppError> {
        if self.falhar {
            return Err(banco_fora());
        }
        let mut registros = self.registros.lock().unwrap();
        Ok(registros.iter_mut().find(|e| e.id == id).map(|e| {
            e.id_empresa = dados.id_empresa;
            e.id_produto = dados.id_produto;
            e.quantidade = dados.quantidade;
            e.data_atualizacao = Utc::now();
            e.clone()
        }))
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AppError> {
        let encontrados = self.filtrar(|e| e.id == id)?;
        Ok(self.existencia_desatualizada || !encontrados.is_empty())
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, AppError> {
        if self.falhar {
            return Err(banco_fora());
        }
        let mut registros = self.registros.lock().unwrap();
        let antes = registros.len();
        registros.retain(|e| e.id != id);
        Ok(registros.len() < antes)
    }
}

#[derive(Default)]
pub struct EmpresaEmMemoria {
    registros: Mutex<Vec<Empresa>>,
    falhar: bool,
}

impl EmpresaEmMemoria {
    pub fn com_registros(registros: Vec<Empresa>) -> Self {
        Self {
            registros: Mutex::new(registros),
            falhar: false,
        }
    }

    pub fn falhando() -> Self {
        Self {
            registros: Mutex::new(Vec::new()),
            falhar: true,
        }
    }

    fn checar(&self) -> Result<(), AppError> {
        if self.falhar { Err(banco_fora()) } else { Ok(()) }
    }
}

pub fn empresa(id: i64, nome_fantasia: &str) -> Empresa {
    Empresa {
        id,
        nome_fantasia: nome_fantasia.to_string(),
        razao_social: format!("{nome_fantasia} LTDA"),
        cnpj: "12345678000199".to_string(),
        data_entrada: Utc::now().date_naive(),
        ativo: true,
    }
}

#[async_trait]
impl EmpresaRepository for EmpresaEmMemoria {
    async fn find_all(&self) -> Result<Vec<Empresa>, AppError> {
        self.checar()?;
        Ok(self.registros.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Empresa>, AppError> {
        self.checar()?;
        Ok(self
            .registros
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn insert(&self, dados: &DadosEmpresa) -> Result<Empresa, AppError> {
        self.checar()?;
        let mut registros = self.registros.lock().unwrap();
        let id = registros.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let nova = Empresa {
            id,
            nome_fantasia: dados.nome_fantasia.clone(),
            razao_social: dados.razao_social.clone(),
            cnpj: dados.cnpj.clone(),
            data_entrada: dados.data_entrada,
            ativo: dados.ativo,
        };
        registros.push(nova.clone());
        Ok(nova)
    }

    async fn update(&self, id: i64, dados: &DadosEmpresa) -> Result<Option<Empresa>, AppError> {
        self.checar()?;
        let mut registros = self.registros.lock().unwrap();
        Ok(registros.iter_mut().find(|e| e.id == id).map(|e| {
            e.nome_fantasia = dados.nome_fantasia.clone();
            e.razao_social = dados.razao_social.clone();
            e.cnpj = dados.cnpj.clone();
            e.data_entrada = dados.data_entrada;
            e.ativo = dados.ativo;
            e.clone()
        }))
    }
}
