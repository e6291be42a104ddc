// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- ESTOQUE ---
        handlers::estoque::get_estoques,
        handlers::estoque::get_estoque_by_id,
        handlers::estoque::get_estoques_by_empresa,
        handlers::estoque::get_estoques_by_produto,
        handlers::estoque::get_estoques_by_empresa_produto,
        handlers::estoque::put_estoque,
        handlers::estoque::delete_estoque,

        // --- EMPRESA ---
        handlers::empresa::get_empresas,
        handlers::empresa::get_empresa_by_id,
        handlers::empresa::put_empresa,
    ),
    components(
        schemas(
            models::estoque::Estoque,
            models::estoque::EstoquePayload,
            models::empresa::Empresa,
            models::empresa::EmpresaPayload,
        )
    ),
    tags(
        (name = "Estoque", description = "Saldos de estoque por empresa e produto"),
        (name = "Empresa", description = "Cadastro de empresas")
    )
)]
pub struct ApiDoc;
