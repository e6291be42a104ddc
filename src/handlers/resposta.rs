// src/handlers/resposta.rs
//
// Tradução do resultado do serviço em status HTTP.
// Sucesso é sempre 202 (Accepted).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::common::error::AppError;

pub fn aceito<T: Serialize>(corpo: T) -> Response {
    (StatusCode::ACCEPTED, Json(corpo)).into_response()
}

pub fn aceito_sem_corpo() -> Response {
    StatusCode::ACCEPTED.into_response()
}

pub fn nao_encontrado() -> Response {
    StatusCode::NOT_FOUND.into_response()
}

/// Registro único: ausente vira 404.
pub fn registro<T: Serialize>(registro: Option<T>) -> Response {
    match registro {
        Some(r) => aceito(r),
        None => nao_encontrado(),
    }
}

/// Lista vazia vira 404.
pub fn lista_nao_vazia<T: Serialize>(lista: Vec<T>) -> Response {
    if lista.is_empty() {
        return nao_encontrado();
    }
    aceito(lista)
}

/// Regra da busca por empresa: lista ausente ou com itens é sucesso,
/// só a lista presente e vazia vira 404. Lista ausente responde sem corpo.
pub fn lista_por_empresa<T: Serialize>(lista: Option<Vec<T>>) -> Response {
    match lista {
        None => aceito_sem_corpo(),
        Some(l) if !l.is_empty() => aceito(l),
        Some(_) => nao_encontrado(),
    }
}

/// Loga a causa e devolve só o status ao cliente.
pub fn falha(origem: &str, operacao: &str, erro: AppError) -> Response {
    if erro.status_code().is_server_error() {
        tracing::error!("{}: erro ao executar {}: {}", origem, operacao, erro);
    } else {
        tracing::warn!("{}: requisição inválida em {}: {}", origem, operacao, erro);
    }
    erro.into_response()
}
