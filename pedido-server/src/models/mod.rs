//! 数据模型

pub mod pedido;

pub use pedido::{Pedido, PedidoCreate, PedidoFields, PedidoStatus, PedidoUpdate};
