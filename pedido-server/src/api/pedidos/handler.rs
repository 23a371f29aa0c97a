//! Pedido API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::ServerState;
use crate::models::{Pedido, PedidoCreate, PedidoFields, PedidoStatus, PedidoUpdate};
use crate::utils::validation::{MAX_ITEM_LEN, validate_quantidade, validate_required_text};
use crate::utils::{AppError, AppResult};

const MSG_NAO_ENCONTRADO: &str = "Pedido não encontrado";
const MSG_ADICIONADO: &str = "Pedido adicionado com sucesso";

/// 订单列表响应
#[derive(Debug, Serialize)]
pub struct PedidosResponse {
    #[serde(rename = "Pedidos")]
    pub pedidos: Vec<Pedido>,
}

/// 已完成订单列表响应
#[derive(Debug, Serialize)]
pub struct PedidosConcluidosResponse {
    #[serde(rename = "Pedidos Concluídos")]
    pub pedidos: Vec<Pedido>,
}

/// 创建订单响应
#[derive(Debug, Serialize)]
pub struct PedidoCriadoResponse {
    pub message: &'static str,
    pub pedido: Pedido,
}

/// GET /pedidos - 获取所有订单
pub async fn list(State(state): State<ServerState>) -> Json<PedidosResponse> {
    let pedidos = state.store.list().await;
    Json(PedidosResponse { pedidos })
}

/// GET /pedidos/concluidos - 获取已完成的订单
pub async fn list_concluidos(State(state): State<ServerState>) -> Json<PedidosConcluidosResponse> {
    let pedidos = state
        .store
        .list()
        .await
        .into_iter()
        .filter(|p| p.status == PedidoStatus::Concluido)
        .collect();
    Json(PedidosConcluidosResponse { pedidos })
}

/// GET /pedidos/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Pedido>> {
    let pedido = state
        .store
        .find_by_id(id)
        .await
        .ok_or_else(|| AppError::not_found(MSG_NAO_ENCONTRADO))?;
    Ok(Json(pedido))
}

/// POST /pedidos/adicionar_pedido - 创建订单
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PedidoCreate>,
) -> AppResult<(StatusCode, Json<PedidoCriadoResponse>)> {
    validate_quantidade(payload.quantidade)?;
    validate_required_text(&payload.item, "item", MAX_ITEM_LEN)?;

    let pedido = state.store.create(payload.item, payload.quantidade).await;

    Ok((
        StatusCode::CREATED,
        Json(PedidoCriadoResponse {
            message: MSG_ADICIONADO,
            pedido,
        }),
    ))
}

/// PUT /pedidos/atualizar_pedido/:id - 更新订单数量
///
/// 只有 "Nao iniciado" 状态的订单可以更新。
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<PedidoUpdate>,
) -> AppResult<StatusCode> {
    validate_quantidade(payload.quantidade)?;

    let atual = state
        .store
        .find_by_id(id)
        .await
        .ok_or_else(|| AppError::not_found(MSG_NAO_ENCONTRADO))?;

    if !atual.status.is_editable() {
        return Err(AppError::validation(format!(
            "Não é possível atualizar pedidos {}",
            atual.status
        )));
    }

    // item is carried over unchanged; only quantidade comes from the caller
    state
        .store
        .update_fields(
            id,
            PedidoFields {
                item: Some(atual.item),
                quantidade: Some(payload.quantidade),
            },
        )
        .await;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /pedidos/concluir_pedido/:id - 完成订单
pub async fn complete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if state.store.complete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(MSG_NAO_ENCONTRADO))
    }
}

/// DELETE /pedidos/remover_pedido/:id - 删除订单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if state.store.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(MSG_NAO_ENCONTRADO))
    }
}
