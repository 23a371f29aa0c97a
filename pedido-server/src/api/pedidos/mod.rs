//! Pedido API 模块

mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::core::ServerState;

pub use handler::{PedidoCriadoResponse, PedidosConcluidosResponse, PedidosResponse};

pub fn router() -> Router<ServerState> {
    Router::new().nest("/pedidos", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        // Fixed segments must be registered before /{id} to avoid path conflicts
        .route("/concluidos", get(handler::list_concluidos))
        .route("/adicionar_pedido", post(handler::create))
        .route("/atualizar_pedido/{id}", put(handler::update))
        .route("/concluir_pedido/{id}", put(handler::complete))
        .route("/remover_pedido/{id}", delete(handler::delete))
        .route("/{id}", get(handler::get_by_id))
}
