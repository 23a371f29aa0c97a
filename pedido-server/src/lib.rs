//! Pedido Server - 订单管理 HTTP 服务
//!
//! # 架构概述
//!
//! 本模块是 Pedido Server 的主入口，提供以下核心功能：
//!
//! - **HTTP API** (`api`): `/pedidos` 下的 RESTful 订单接口
//! - **内存存储** (`store`): 进程内订单集合（模拟数据库）
//! - **数据模型** (`models`): 订单实体和请求载荷
//!
//! # 模块结构
//!
//! ```text
//! pedido-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── models/        # 数据模型
//! ├── store/         # 内存存储层
//! └── utils/         # 错误、日志等工具
//! ```

pub mod api;
pub mod core;
pub mod models;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use crate::models::{Pedido, PedidoStatus};
pub use crate::store::{MemoryPedidoStore, PedidoStore};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
///
/// 必须在读取配置之前调用，`.env` 中的变量才会生效。
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (missing file is fine)
    let _ = dotenvy::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}
