//! Store 存储层抽象
//!
//! 提供可插拔的订单存储能力：
//! ```text
//!         ┌────────────────────┐
//!         │  PedidoStore Trait │  ◄── 处理器依赖的接口
//!         └────────┬───────────┘
//!                  │
//!                  ▼
//!         MemoryPedidoStore (进程内 Vec，模拟数据库)
//! ```
//!
//! 处理器永远只通过 trait 访问集合；测试用自己的内存实例注入，
//! 不依赖任何进程级全局状态。

mod memory;

pub use memory::MemoryPedidoStore;

use async_trait::async_trait;

use crate::models::{Pedido, PedidoFields};

/// 订单存储能力
///
/// 所有查找都是按整数 id 的线性扫描；集合小且短命，不维护索引。
#[async_trait]
pub trait PedidoStore: Send + Sync {
    /// 返回全部订单，保持插入顺序
    async fn list(&self) -> Vec<Pedido>;

    /// 按 id 返回第一个匹配的订单
    async fn find_by_id(&self, id: i64) -> Option<Pedido>;

    /// 分配下一个 id 并追加新订单，初始状态 "Em andamento"
    async fn create(&self, item: String, quantidade: i32) -> Pedido;

    /// 将给定字段合并到匹配的订单；id 不存在时为空操作
    async fn update_fields(&self, id: i64, fields: PedidoFields);

    /// 将状态置为 "Concluido"，返回是否找到匹配订单
    async fn complete(&self, id: i64) -> bool;

    /// 删除第一个匹配的订单，返回是否找到
    async fn remove(&self, id: i64) -> bool;
}
