//! 算法模块
//!
//! 包含图相关算法实现

pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod spanning_tree;
pub mod union_find;

// 重新导出常用算法结构体
pub use dijkstra::{Dijkstra, ShortestPaths};
pub use kruskal::Kruskal;
pub use prim::Prim;
pub use spanning_tree::SpanningTree;
pub use union_find::UnionFind;
