//! Kruskal算法模块
//!
//! 包含基于全局边排序与并查集的最小生成森林算法实现

use crate::core::graph::Graph;
use crate::services::algorithm::spanning_tree::SpanningTree;
use crate::services::algorithm::union_find::UnionFind;

/// Kruskal算法结构体
pub struct Kruskal;

impl Kruskal {
    /// 计算最小生成森林
    ///
    /// 边按权重升序逐一检验，仅当两端点尚未连通时接受。
    /// 遍历完全部边后自然结束；一旦某分量已成树，后续边的合并
    /// 只会返回false被跳过。非连通图得到覆盖所有分量的生成森林。
    pub fn spanning_tree(graph: &Graph) -> SpanningTree {
        let mut sorted = graph.edges().to_vec();
        sorted.sort_by_key(|edge| edge.weight);

        let mut dsu = UnionFind::new(graph.node_count());
        let mut tree = SpanningTree::new();

        for edge in sorted {
            if dsu.unite(edge.u, edge.v) {
                tree.push(edge);
            }
        }

        log::debug!(
            "Kruskal完成: {} 条边, 总权重 {}",
            tree.edge_count(),
            tree.total_weight
        );

        tree
    }
}
