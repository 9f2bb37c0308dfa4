pub mod error;
pub mod graph;

// 错误和结果类型
pub use error::{GraphError, GraphResult};

// 核心数据类型
pub use graph::{Edge, Graph};
