// src/handlers/empresa.rs

use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::resposta,
    models::empresa::{Empresa, EmpresaPayload},
};

const ORIGEM: &str = "EmpresaHandler";

#[utoipa::path(
    get,
    path = "/api/empresa",
    tag = "Empresa",
    responses(
        (status = 202, description = "Todas as empresas", body = Vec<Empresa>),
        (status = 500, description = "Erro interno")
    )
)]
pub async fn get_empresas(State(app_state): State<AppState>) -> Response {
    tracing::info!("{}: iniciando processamento get_empresas()", ORIGEM);

    let resposta = match app_state.empresa_service.get_all().await {
        Ok(empresas) => resposta::aceito(empresas),
        Err(e) => resposta::falha(ORIGEM, "get_empresas()", e),
    };

    tracing::info!("{}: finalizando processamento get_empresas()", ORIGEM);
    resposta
}

#[utoipa::path(
    get,
    path = "/api/empresa/{id}",
    tag = "Empresa",
    params(("id" = i64, Path, description = "Id da empresa")),
    responses(
        (status = 202, description = "Empresa encontrada", body = Empresa),
        (status = 404, description = "Empresa não existe"),
        (status = 500, description = "Erro interno")
    )
)]
pub async fn get_empresa_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    tracing::info!("{}: iniciando processamento get_empresa_by_id(/{})", ORIGEM, id);

    let resposta = match app_state.empresa_service.get_by_id(id).await {
        Ok(empresa) => resposta::registro(empresa),
        Err(e) => resposta::falha(ORIGEM, &format!("get_empresa_by_id(/{id})"), e),
    };

    tracing::info!("{}: finalizando processamento get_empresa_by_id(/{})", ORIGEM, id);
    resposta
}

#[utoipa::path(
    put,
    path = "/api/empresa",
    tag = "Empresa",
    request_body = EmpresaPayload,
    responses(
        (status = 202, description = "Empresa gravada", body = Empresa),
        (status = 400, description = "Payload inválido"),
        (status = 500, description = "Erro interno")
    )
)]
pub async fn put_empresa(
    State(app_state): State<AppState>,
    Json(payload): Json<EmpresaPayload>,
) -> Response {
    tracing::info!("{}: iniciando processamento put_empresa()", ORIGEM);

    let resultado = match payload.validate() {
        Ok(()) => {
            let (id, dados) = payload.into_parts(Utc::now().date_naive());
            app_state.empresa_service.save(id, dados).await
        }
        Err(e) => Err(AppError::ValidationError(e)),
    };

    let resposta = match resultado {
        Ok(empresa) => resposta::aceito(empresa),
        Err(e) => resposta::falha(ORIGEM, "put_empresa()", e),
    };

    tracing::info!("{}: finalizando processamento put_empresa()", ORIGEM);
    resposta
}
