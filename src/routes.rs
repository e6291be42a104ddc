// src/routes.rs

use axum::{routing::get, Router};
use tower_http::{
    normalize_path::NormalizePath,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub fn criar_router(app_state: AppState) -> Router {
    let estoque_routes = Router::new()
        .route("/"
               ,get(handlers::estoque::get_estoques)
               .put(handlers::estoque::put_estoque)
        )
        .route("/{id}"
               ,get(handlers::estoque::get_estoque_by_id)
               .delete(handlers::estoque::delete_estoque)
        )
        .route("/empresa/{id_empresa}"
               ,get(handlers::estoque::get_estoques_by_empresa)
        )
        .route("/produto/{id_produto}"
               ,get(handlers::estoque::get_estoques_by_produto)
        )
        // Mesmo nome de parâmetro que "/{id}" na primeira posição
        .route("/{id}/{id_produto}"
               ,get(handlers::estoque::get_estoques_by_empresa_produto)
        );

    let empresa_routes = Router::new()
        .route("/"
               ,get(handlers::empresa::get_empresas)
               .put(handlers::empresa::put_empresa)
        )
        .route("/{id}"
               ,get(handlers::empresa::get_empresa_by_id)
        );

    // Combina tudo no router da API
    let api = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/estoque", estoque_routes)
        .nest("/api/empresa", empresa_routes)
        .with_state(app_state);

    // A barra final é removida antes do roteamento da API: "/api/estoque/" == "/api/estoque".
    // O Swagger fica de fora, ele mesmo redireciona "/swagger-ui" para "/swagger-ui/".
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(NormalizePath::trim_trailing_slash(api))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
