// src/handlers/estoque.rs

use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::resposta,
    models::estoque::{Estoque, EstoquePayload},
};

const ORIGEM: &str = "EstoqueHandler";

// ---
// Handler: get_estoques
// ---
#[utoipa::path(
    get,
    path = "/api/estoque",
    tag = "Estoque",
    responses(
        (status = 202, description = "Todos os registros de estoque", body = Vec<Estoque>),
        (status = 500, description = "Erro interno")
    )
)]
pub async fn get_estoques(State(app_state): State<AppState>) -> Response {
    tracing::info!("{}: iniciando processamento get_estoques()", ORIGEM);

    let resposta = match app_state.estoque_service.get_all().await {
        Ok(estoques) => resposta::aceito(estoques),
        Err(e) => resposta::falha(ORIGEM, "get_estoques()", e),
    };

    tracing::info!("{}: finalizando processamento get_estoques()", ORIGEM);
    resposta
}

// ---
// Handler: get_estoque_by_id
// ---
#[utoipa::path(
    get,
    path = "/api/estoque/{id}",
    tag = "Estoque",
    params(("id" = i32, Path, description = "Id do registro de estoque")),
    responses(
        (status = 202, description = "Registro encontrado", body = Estoque),
        (status = 404, description = "Registro não existe"),
        (status = 500, description = "Erro interno")
    )
)]
pub async fn get_estoque_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Response {
    tracing::info!("{}: iniciando processamento get_estoque_by_id(/{})", ORIGEM, id);

    let resposta = match app_state.estoque_service.get_by_id(id).await {
        Ok(estoque) => resposta::registro(estoque),
        Err(e) => resposta::falha(ORIGEM, &format!("get_estoque_by_id(/{id})"), e),
    };

    tracing::info!("{}: finalizando processamento get_estoque_by_id(/{})", ORIGEM, id);
    resposta
}

// ---
// Handler: get_estoques_by_empresa
// ---
#[utoipa::path(
    get,
    path = "/api/estoque/empresa/{id_empresa}",
    tag = "Estoque",
    params(("id_empresa" = i64, Path, description = "Id da empresa")),
    responses(
        (
            status = 202,
            description = "Registros da empresa (sem corpo se a empresa não tem estoque)",
            body = Vec<Estoque>
        ),
        (status = 404, description = "Lista vazia"),
        (status = 500, description = "Erro interno")
    )
)]
pub async fn get_estoques_by_empresa(
    State(app_state): State<AppState>,
    Path(id_empresa): Path<i64>,
) -> Response {
    tracing::info!(
        "{}: iniciando processamento get_estoques_by_empresa(/empresa/{})",
        ORIGEM,
        id_empresa
    );

    let resposta = match app_state.estoque_service.get_by_empresa(id_empresa).await {
        Ok(estoques) => resposta::lista_por_empresa(estoques),
        Err(e) => resposta::falha(
            ORIGEM,
            &format!("get_estoques_by_empresa(/empresa/{id_empresa})"),
            e,
        ),
    };

    tracing::info!(
        "{}: finalizando processamento get_estoques_by_empresa(/empresa/{})",
        ORIGEM,
        id_empresa
    );
    resposta
}

// ---
// Handler: get_estoques_by_produto
// ---
#[utoipa::path(
    get,
    path = "/api/estoque/produto/{id_produto}",
    tag = "Estoque",
    params(("id_produto" = i32, Path, description = "Id do produto")),
    responses(
        (status = 202, description = "Registros do produto", body = Vec<Estoque>),
        (status = 404, description = "Nenhum registro para o produto"),
        (status = 500, description = "Erro interno")
    )
)]
pub async fn get_estoques_by_produto(
    State(app_state): State<AppState>,
    Path(id_produto): Path<i32>,
) -> Response {
    tracing::info!(
        "{}: iniciando processamento get_estoques_by_produto(/produto/{})",
        ORIGEM,
        id_produto
    );

    let resposta = match app_state.estoque_service.get_by_produto(id_produto).await {
        Ok(estoques) => resposta::lista_nao_vazia(estoques),
        Err(e) => resposta::falha(
            ORIGEM,
            &format!("get_estoques_by_produto(/produto/{id_produto})"),
            e,
        ),
    };

    tracing::info!(
        "{}: finalizando processamento get_estoques_by_produto(/produto/{})",
        ORIGEM,
        id_produto
    );
    resposta
}

// ---
// Handler: get_estoques_by_empresa_produto
// ---
#[utoipa::path(
    get,
    path = "/api/estoque/{id}/{id_produto}",
    tag = "Estoque",
    params(
        // Mesmo nome da rota registrada em routes.rs
        ("id" = i64, Path, description = "Id da empresa"),
        ("id_produto" = i32, Path, description = "Id do produto")
    ),
    responses(
        (status = 202, description = "Registros da empresa para o produto", body = Vec<Estoque>),
        (status = 404, description = "Nenhum registro para o par"),
        (status = 500, description = "Erro interno")
    )
)]
pub async fn get_estoques_by_empresa_produto(
    State(app_state): State<AppState>,
    Path((id_empresa, id_produto)): Path<(i64, i32)>,
) -> Response {
    tracing::info!(
        "{}: iniciando processamento get_estoques_by_empresa_produto(/{}/{})",
        ORIGEM,
        id_empresa,
        id_produto
    );

    let resposta = match app_state
        .estoque_service
        .get_by_empresa_produto(id_empresa, id_produto)
        .await
    {
        Ok(estoques) => resposta::lista_nao_vazia(estoques),
        Err(e) => resposta::falha(
            ORIGEM,
            &format!("get_estoques_by_empresa_produto(/{id_empresa}/{id_produto})"),
            e,
        ),
    };

    tracing::info!(
        "{}: finalizando processamento get_estoques_by_empresa_produto(/{}/{})",
        ORIGEM,
        id_empresa,
        id_produto
    );
    resposta
}

// ---
// Handler: put_estoque (cria ou atualiza)
// ---
#[utoipa::path(
    put,
    path = "/api/estoque",
    tag = "Estoque",
    request_body = EstoquePayload,
    responses(
        (status = 202, description = "Registro gravado", body = Estoque),
        (status = 400, description = "Payload inválido"),
        (status = 500, description = "Erro interno")
    )
)]
pub async fn put_estoque(
    State(app_state): State<AppState>,
    Json(payload): Json<EstoquePayload>,
) -> Response {
    tracing::info!("{}: iniciando processamento put_estoque()", ORIGEM);

    let resultado = match payload.validate() {
        Ok(()) => {
            let (id, dados) = payload.into_parts();
            app_state.estoque_service.save(id, dados).await
        }
        Err(e) => Err(AppError::ValidationError(e)),
    };

    let resposta = match resultado {
        Ok(estoque) => resposta::aceito(estoque),
        Err(e) => resposta::falha(ORIGEM, "put_estoque()", e),
    };

    tracing::info!("{}: finalizando processamento put_estoque()", ORIGEM);
    resposta
}

// ---
// Handler: delete_estoque
// ---
#[utoipa::path(
    delete,
    path = "/api/estoque/{id}",
    tag = "Estoque",
    params(("id" = i32, Path, description = "Id do registro de estoque")),
    responses(
        (status = 202, description = "Registro removido"),
        (status = 404, description = "Registro não existe"),
        (status = 500, description = "Erro interno")
    )
)]
pub async fn delete_estoque(State(app_state): State<AppState>, Path(id): Path<i32>) -> Response {
    tracing::info!("{}: iniciando processamento delete_estoque({})", ORIGEM, id);

    let resposta = match app_state.estoque_service.delete(id).await {
        Ok(true) => resposta::aceito_sem_corpo(),
        Ok(false) => resposta::nao_encontrado(),
        Err(e) => resposta::falha(ORIGEM, &format!("delete_estoque({id})"), e),
    };

    tracing::info!("{}: finalizando processamento delete_estoque({})", ORIGEM, id);
    resposta
}
