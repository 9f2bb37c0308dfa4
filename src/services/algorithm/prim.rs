//! Prim算法模块
//!
//! 包含从固定根节点1出发的最小生成树算法实现

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::graph::{Edge, Graph};
use crate::services::algorithm::spanning_tree::SpanningTree;

/// Prim算法结构体
pub struct Prim;

/// 节点键值结构体，用于优先队列
#[derive(Debug, Clone, Eq, PartialEq)]
struct NodeKey {
    node: usize,
    key: i64,
}

impl Ord for NodeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key.cmp(&self.key)
    }
}

impl PartialOrd for NodeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Prim {
    /// 计算以节点1为根的最小生成树
    ///
    /// 懒删除式Prim：弹出时检查节点是否已入树，过期条目直接丢弃。
    /// 空图返回空结果；非连通图只覆盖节点1所在的连通分量，
    /// 其余节点不出现在结果中。
    pub fn spanning_tree(graph: &Graph) -> SpanningTree {
        let n = graph.node_count();
        let mut tree = SpanningTree::new();
        if n == 0 {
            return tree;
        }

        let mut in_tree = vec![false; n + 1];
        let mut key = vec![i64::MAX; n + 1];
        // 0表示尚无父节点，节点编号从1开始
        let mut parent = vec![0usize; n + 1];
        let mut to_visit: BinaryHeap<NodeKey> = BinaryHeap::new();

        key[1] = 0;
        to_visit.push(NodeKey { node: 1, key: 0 });

        while let Some(NodeKey { node: u, .. }) = to_visit.pop() {
            if in_tree[u] {
                continue;
            }
            in_tree[u] = true;

            if parent[u] != 0 {
                tree.push(Edge {
                    u: parent[u],
                    v: u,
                    weight: key[u],
                });
            }

            for &(v, w) in graph.neighbors(u) {
                if !in_tree[v] && w < key[v] {
                    key[v] = w;
                    parent[v] = u;
                    to_visit.push(NodeKey { node: v, key: w });
                }
            }
        }

        log::debug!(
            "Prim完成: {} 条边, 总权重 {}",
            tree.edge_count(),
            tree.total_weight
        );

        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanning_tree_discovery_order() {
        // 1-2/4, 1-3/1, 2-3/2：最小生成树取 1-3 与 3-2
        let graph = Graph::parse("2 4 3 1\n1 4 3 2\n1 1 2 2\n")
            .expect("parse should succeed in test");
        let tree = Prim::spanning_tree(&graph);

        assert_eq!(
            tree.edges,
            vec![
                Edge { u: 1, v: 3, weight: 1 },
                Edge { u: 3, v: 2, weight: 2 }
            ]
        );
        assert_eq!(tree.total_weight, 3);
    }

    #[test]
    fn test_empty_graph_yields_empty_tree() {
        let graph = Graph::parse("").expect("parse should succeed in test");
        let tree = Prim::spanning_tree(&graph);
        assert_eq!(tree.edge_count(), 0);
        assert_eq!(tree.total_weight, 0);
    }

    #[test]
    fn test_disconnected_graph_spans_root_component_only() {
        // 分量{1,2}与{3,4}之间没有边
        let graph = Graph::parse("2 1\n1 1\n4 5\n3 5\n").expect("parse should succeed in test");
        let tree = Prim::spanning_tree(&graph);

        assert_eq!(tree.edges, vec![Edge { u: 1, v: 2, weight: 1 }]);
        assert_eq!(tree.total_weight, 1);
    }

    #[test]
    fn test_single_node_with_self_loop() {
        // 自环指向已入树的节点，不会被选中
        let graph = Graph::parse("1 0\n").expect("parse should succeed in test");
        let tree = Prim::spanning_tree(&graph);
        assert_eq!(tree.edge_count(), 0);
        assert_eq!(tree.total_weight, 0);
    }
}
