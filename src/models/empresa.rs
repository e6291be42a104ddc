// src/models/empresa.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

// --- Empresa ---
// Representa a tabela 'empresa'.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Empresa {
    pub id: i64,
    pub nome_fantasia: String,
    pub razao_social: String,
    pub cnpj: String,
    pub data_entrada: NaiveDate,
    pub ativo: bool,
}

// O CNPJ é gravado só com os 14 dígitos, sem pontuação.
fn validate_cnpj(cnpj: &str) -> Result<(), ValidationError> {
    if cnpj.len() != 14 || !cnpj.bytes().all(|b| b.is_ascii_digit()) {
        let mut err = ValidationError::new("cnpj");
        err.message = Some("O CNPJ deve conter exatamente 14 dígitos.".into());
        return Err(err);
    }
    Ok(())
}

// ---
// Payload: corpo do PUT /api/empresa
// ---
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmpresaPayload {
    pub id: Option<i64>,

    #[validate(length(min = 1, message = "O nome fantasia é obrigatório."))]
    pub nome_fantasia: String,

    #[validate(length(min = 1, message = "A razão social é obrigatória."))]
    pub razao_social: String,

    #[validate(custom(function = "validate_cnpj"))]
    pub cnpj: String,

    // Se não vier, assume a data de hoje
    pub data_entrada: Option<NaiveDate>,

    pub ativo: Option<bool>,
}

/// Campos graváveis de uma empresa, já com os valores padrão aplicados.
#[derive(Debug, Clone, PartialEq)]
pub struct DadosEmpresa {
    pub nome_fantasia: String,
    pub razao_social: String,
    pub cnpj: String,
    pub data_entrada: NaiveDate,
    pub ativo: bool,
}

impl EmpresaPayload {
    pub fn into_parts(self, hoje: NaiveDate) -> (Option<i64>, DadosEmpresa) {
        (
            self.id,
            DadosEmpresa {
                nome_fantasia: self.nome_fantasia,
                razao_social: self.razao_social,
                cnpj: self.cnpj,
                data_entrada: self.data_entrada.unwrap_or(hoje),
                ativo: self.ativo.unwrap_or(true),
            },
        )
    }
}
