//! Pedido Model

use serde::{Deserialize, Serialize};

/// Pedido lifecycle status
///
/// 闭合枚举：序列化固定使用下面的标签，未知标签视为数据错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PedidoStatus {
    /// 进行中 (创建时的初始状态，字段锁定)
    #[serde(rename = "Em andamento")]
    EmAndamento,
    /// 已完成 (终态)
    #[serde(rename = "Concluido")]
    Concluido,
    /// 未开始 (唯一允许更新字段的状态)
    #[serde(rename = "Nao iniciado")]
    NaoIniciado,
}

impl PedidoStatus {
    /// Wire label, identical to the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PedidoStatus::EmAndamento => "Em andamento",
            PedidoStatus::Concluido => "Concluido",
            PedidoStatus::NaoIniciado => "Nao iniciado",
        }
    }

    /// Only "Nao iniciado" pedidos accept field updates
    pub fn is_editable(&self) -> bool {
        matches!(self, PedidoStatus::NaoIniciado)
    }
}

impl std::fmt::Display for PedidoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pedido entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pedido {
    pub id: i64,
    pub item: String,
    pub quantidade: i32,
    pub status: PedidoStatus,
}

/// Create pedido payload
#[derive(Debug, Clone, Deserialize)]
pub struct PedidoCreate {
    pub item: String,
    pub quantidade: i32,
}

/// Update pedido payload
#[derive(Debug, Clone, Deserialize)]
pub struct PedidoUpdate {
    pub quantidade: i32,
}

/// Field merge for the store layer: only the fields present are applied
#[derive(Debug, Clone, Default)]
pub struct PedidoFields {
    pub item: Option<String>,
    pub quantidade: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_labels() {
        let json = serde_json::to_string(&PedidoStatus::EmAndamento).unwrap();
        assert_eq!(json, "\"Em andamento\"");

        let status: PedidoStatus = serde_json::from_str("\"Nao iniciado\"").unwrap();
        assert_eq!(status, PedidoStatus::NaoIniciado);
        assert_eq!(status.to_string(), "Nao iniciado");
    }

    #[test]
    fn test_status_unknown_label_is_rejected() {
        // The misspelling that appeared in legacy sample data must not parse
        let result = serde_json::from_str::<PedidoStatus>("\"Nao inciado\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_only_nao_iniciado_is_editable() {
        assert!(PedidoStatus::NaoIniciado.is_editable());
        assert!(!PedidoStatus::EmAndamento.is_editable());
        assert!(!PedidoStatus::Concluido.is_editable());
    }

    #[test]
    fn test_pedido_json_shape() {
        let pedido = Pedido {
            id: 1,
            item: "Pizza".to_string(),
            quantidade: 2,
            status: PedidoStatus::EmAndamento,
        };
        let value = serde_json::to_value(&pedido).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "item": "Pizza",
                "quantidade": 2,
                "status": "Em andamento",
            })
        );
    }
}
