//! 统一错误处理系统 for GraphAlgo
//!
//! 错误种类少且结构简单，统一使用枚举设计；`GraphResult<T>` 提供
//! 统一的返回类型，简化错误传播。所有错误都同步返回给调用方，
//! 不会跨越算法与展示层边界抛出。

use thiserror::Error;

/// 统一的图算法错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("解析错误: {0}")]
    Parse(String),

    #[error("源节点越界: {source} 不在 [1, {node_count}] 范围内")]
    InvalidSource { source: usize, node_count: usize },

    #[error("IO错误: {0}")]
    Io(String),
}

/// 统一的结果类型
pub type GraphResult<T> = Result<T, GraphError>;

impl From<std::io::Error> for GraphError {
    fn from(e: std::io::Error) -> Self {
        GraphError::Io(e.to_string())
    }
}
