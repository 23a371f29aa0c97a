use std::sync::Arc;

use crate::store::{MemoryPedidoStore, PedidoStore};

/// 服务器状态 - 持有所有处理器共享的依赖
///
/// 存储层以 `Arc<dyn PedidoStore>` 注入，处理器只依赖存储能力接口。
/// 测试可以通过 [`ServerState::with_store`] 提供自己的（隔离的）存储实例，
/// 而不是共享一个进程级全局变量。
#[derive(Clone)]
pub struct ServerState {
    /// 订单存储
    pub store: Arc<dyn PedidoStore>,
}

impl ServerState {
    /// 创建带初始样例数据的状态 (生产入口使用)
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryPedidoStore::seeded()))
    }

    /// 使用给定的存储实例创建状态 (测试场景)
    pub fn with_store(store: Arc<dyn PedidoStore>) -> Self {
        Self { store }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}
