//! In-memory pedido store
//!
//! A `Vec` behind a `tokio::sync::RwLock` standing in for a database. The
//! lock only serialises individual store operations; there is no
//! cross-operation transactionality, so a handler's check-then-act sequence
//! can still interleave with another request.
//!
//! # Id assignment
//!
//! Ids come from an explicit monotonically increasing counter, independent
//! of the collection length. A removed pedido's id is never handed out
//! again for the lifetime of the store.

use tokio::sync::RwLock;

use async_trait::async_trait;

use crate::models::{Pedido, PedidoFields, PedidoStatus};
use crate::store::PedidoStore;

struct Inner {
    pedidos: Vec<Pedido>,
    next_id: i64,
}

/// In-memory implementation of [`PedidoStore`]
pub struct MemoryPedidoStore {
    inner: RwLock<Inner>,
}

impl MemoryPedidoStore {
    /// Create an empty store; the first created pedido gets id 1
    pub fn new() -> Self {
        Self::with_pedidos(Vec::new())
    }

    /// Create a store pre-loaded with the given pedidos
    ///
    /// The id counter resumes after the highest seeded id.
    pub fn with_pedidos(pedidos: Vec<Pedido>) -> Self {
        let next_id = pedidos.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Inner { pedidos, next_id }),
        }
    }

    /// Create a store with the sample dataset used by the production entry
    pub fn seeded() -> Self {
        let sample = [
            (1, "Pizza", 2, PedidoStatus::EmAndamento),
            (2, "Hambúrguer", 1, PedidoStatus::Concluido),
            (3, "Salada", 3, PedidoStatus::EmAndamento),
            (4, "Sushi", 2, PedidoStatus::NaoIniciado),
            (5, "Lasanha", 1, PedidoStatus::Concluido),
            (6, "Sorvete", 2, PedidoStatus::EmAndamento),
            (7, "Frango Grelhado", 1, PedidoStatus::NaoIniciado),
        ];
        Self::with_pedidos(
            sample
                .into_iter()
                .map(|(id, item, quantidade, status)| Pedido {
                    id,
                    item: item.to_string(),
                    quantidade,
                    status,
                })
                .collect(),
        )
    }
}

impl Default for MemoryPedidoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PedidoStore for MemoryPedidoStore {
    async fn list(&self) -> Vec<Pedido> {
        self.inner.read().await.pedidos.clone()
    }

    async fn find_by_id(&self, id: i64) -> Option<Pedido> {
        self.inner
            .read()
            .await
            .pedidos
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    async fn create(&self, item: String, quantidade: i32) -> Pedido {
        let mut inner = self.inner.write().await;
        let pedido = Pedido {
            id: inner.next_id,
            item,
            quantidade,
            status: PedidoStatus::EmAndamento,
        };
        inner.next_id += 1;
        inner.pedidos.push(pedido.clone());
        pedido
    }

    async fn update_fields(&self, id: i64, fields: PedidoFields) {
        let mut inner = self.inner.write().await;
        if let Some(pedido) = inner.pedidos.iter_mut().find(|p| p.id == id) {
            if let Some(item) = fields.item {
                pedido.item = item;
            }
            if let Some(quantidade) = fields.quantidade {
                pedido.quantidade = quantidade;
            }
        }
    }

    async fn complete(&self, id: i64) -> bool {
        let mut inner = self.inner.write().await;
        match inner.pedidos.iter_mut().find(|p| p.id == id) {
            Some(pedido) => {
                pedido.status = PedidoStatus::Concluido;
                true
            }
            None => false,
        }
    }

    async fn remove(&self, id: i64) -> bool {
        let mut inner = self.inner.write().await;
        match inner.pedidos.iter().position(|p| p.id == id) {
            Some(index) => {
                inner.pedidos.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pedido(id: i64, item: &str, quantidade: i32, status: PedidoStatus) -> Pedido {
        Pedido {
            id,
            item: item.to_string(),
            quantidade,
            status,
        }
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = MemoryPedidoStore::new();
        store.create("Pizza".to_string(), 2).await;
        store.create("Sushi".to_string(), 1).await;
        store.create("Salada".to_string(), 3).await;

        let itens: Vec<String> = store.list().await.into_iter().map(|p| p.item).collect();
        assert_eq!(itens, ["Pizza", "Sushi", "Salada"]);
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = MemoryPedidoStore::new();
        let a = store.create("Pizza".to_string(), 2).await;
        let b = store.create("Sushi".to_string(), 1).await;

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.status, PedidoStatus::EmAndamento);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_remove() {
        let store = MemoryPedidoStore::new();
        store.create("Pizza".to_string(), 2).await;
        let b = store.create("Sushi".to_string(), 1).await;

        assert!(store.remove(b.id).await);

        // Counter keeps going; the freed id never comes back
        let c = store.create("Salada".to_string(), 3).await;
        assert_eq!(c.id, 3);
        assert!(store.find_by_id(b.id).await.is_none());
    }

    #[tokio::test]
    async fn test_with_pedidos_resumes_counter_after_highest_id() {
        let store = MemoryPedidoStore::with_pedidos(vec![
            pedido(1, "Pizza", 2, PedidoStatus::EmAndamento),
            pedido(7, "Sushi", 1, PedidoStatus::NaoIniciado),
        ]);

        let created = store.create("Salada".to_string(), 3).await;
        assert_eq!(created.id, 8);
    }

    #[tokio::test]
    async fn test_update_fields_merges_only_given_fields() {
        let store = MemoryPedidoStore::with_pedidos(vec![pedido(
            1,
            "Pizza",
            2,
            PedidoStatus::NaoIniciado,
        )]);

        store
            .update_fields(
                1,
                PedidoFields {
                    item: None,
                    quantidade: Some(5),
                },
            )
            .await;

        let atual = store.find_by_id(1).await.unwrap();
        assert_eq!(atual.item, "Pizza");
        assert_eq!(atual.quantidade, 5);
        assert_eq!(atual.status, PedidoStatus::NaoIniciado);
    }

    #[tokio::test]
    async fn test_update_fields_is_noop_for_unknown_id() {
        let store = MemoryPedidoStore::with_pedidos(vec![pedido(
            1,
            "Pizza",
            2,
            PedidoStatus::NaoIniciado,
        )]);

        store
            .update_fields(
                99,
                PedidoFields {
                    item: Some("Sushi".to_string()),
                    quantidade: Some(5),
                },
            )
            .await;

        assert_eq!(store.list().await, vec![pedido(1, "Pizza", 2, PedidoStatus::NaoIniciado)]);
    }

    #[tokio::test]
    async fn test_complete_reports_match() {
        let store = MemoryPedidoStore::with_pedidos(vec![pedido(
            1,
            "Pizza",
            2,
            PedidoStatus::NaoIniciado,
        )]);

        assert!(store.complete(1).await);
        assert_eq!(
            store.find_by_id(1).await.unwrap().status,
            PedidoStatus::Concluido
        );

        assert!(!store.complete(99).await);
    }

    #[tokio::test]
    async fn test_remove_reports_match() {
        let store = MemoryPedidoStore::with_pedidos(vec![
            pedido(1, "Pizza", 2, PedidoStatus::EmAndamento),
            pedido(2, "Sushi", 1, PedidoStatus::Concluido),
        ]);

        assert!(store.remove(1).await);
        assert!(store.find_by_id(1).await.is_none());
        assert_eq!(store.list().await.len(), 1);

        assert!(!store.remove(1).await);
    }

    #[tokio::test]
    async fn test_seeded_dataset() {
        let store = MemoryPedidoStore::seeded();
        let pedidos = store.list().await;

        assert_eq!(pedidos.len(), 7);
        assert_eq!(pedidos[0].item, "Pizza");
        assert_eq!(pedidos[6].item, "Frango Grelhado");

        // Counter resumes after the sample data
        let created = store.create("Batata Frita".to_string(), 2).await;
        assert_eq!(created.id, 8);
    }
}
