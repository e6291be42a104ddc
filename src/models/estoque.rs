// src/models/estoque.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

// --- Estoque ---
// Liga uma empresa a um produto, com a quantidade disponível.
// Representa a tabela 'estoque'.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Estoque {
    pub id: i32,
    pub id_empresa: i64,
    pub id_produto: i32,
    #[schema(value_type = f64)]
    pub quantidade: Decimal,
    pub data_atualizacao: DateTime<Utc>,
}

fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

// ---
// Payload: corpo do PUT /api/estoque
// ---
// Sem `id` (ou com um id inexistente) o registro é criado; com um id existente, atualizado.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EstoquePayload {
    pub id: Option<i32>,

    pub id_empresa: i64,

    pub id_produto: i32,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    #[schema(value_type = f64)]
    pub quantidade: Decimal,
}

/// Campos graváveis de um registro de estoque.
#[derive(Debug, Clone, PartialEq)]
pub struct DadosEstoque {
    pub id_empresa: i64,
    pub id_produto: i32,
    pub quantidade: Decimal,
}

impl EstoquePayload {
    /// Separa o id (se houver) dos dados a gravar.
    pub fn into_parts(self) -> (Option<i32>, DadosEstoque) {
        (
            self.id,
            DadosEstoque {
                id_empresa: self.id_empresa,
                id_produto: self.id_produto,
                quantidade: self.quantidade,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn payload_aceita_json_sem_id() {
        let payload: EstoquePayload =
            serde_json::from_str(r#"{"idEmpresa":1,"idProduto":2,"quantidade":10}"#).unwrap();

        assert!(payload.validate().is_ok());
        let (id, dados) = payload.into_parts();
        assert_eq!(id, None);
        assert_eq!(dados.id_empresa, 1);
        assert_eq!(dados.id_produto, 2);
        assert_eq!(dados.quantidade, Decimal::from(10));
    }

    #[test]
    fn quantidade_negativa_e_rejeitada() {
        let payload: EstoquePayload =
            serde_json::from_str(r#"{"idEmpresa":1,"idProduto":2,"quantidade":-1}"#).unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantidade"));
    }

    #[test]
    fn quantidade_ausente_vale_zero() {
        let payload: EstoquePayload =
            serde_json::from_str(r#"{"id":7,"idEmpresa":1,"idProduto":2}"#).unwrap();

        assert_eq!(payload.id, Some(7));
        assert_eq!(payload.quantidade, Decimal::ZERO);
    }
}
