//! Dijkstra算法模块
//!
//! 包含带权图单源最短路径算法实现，支持路径重建

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::core::error::{GraphError, GraphResult};
use crate::core::graph::Graph;

/// Dijkstra算法结构体
pub struct Dijkstra;

/// 节点距离结构体，用于优先队列
#[derive(Debug, Clone, Eq, PartialEq)]
struct NodeDistance {
    node: usize,
    distance: i64,
}

impl Ord for NodeDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance.cmp(&self.distance)
    }
}

impl PartialOrd for NodeDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra算法结果
///
/// 距离与前驱都按节点编号直接索引，槽位0保留未用。
/// 不可达节点的距离为None，因此松弛永远不会从不可达节点出发。
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<Option<i64>>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// 起始节点
    pub fn source(&self) -> usize {
        self.source
    }

    /// 图的节点数
    pub fn node_count(&self) -> usize {
        self.distances.len() - 1
    }

    /// 获取到目标节点的最短距离，不可达时返回None
    pub fn distance_to(&self, target: usize) -> Option<i64> {
        self.distances.get(target).copied().flatten()
    }

    /// 重建从起点到目标节点的路径
    ///
    /// 沿前驱节点回溯到起点后反转，返回从起点到目标的节点序列；
    /// 目标不可达时返回None
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance_to(target)?;

        let mut path = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.predecessors[current] {
            path.push(predecessor);
            current = predecessor;
        }
        path.reverse();
        Some(path)
    }
}

impl Dijkstra {
    /// 计算从起点到所有节点的最短路径
    ///
    /// # 参数
    /// - `graph`: 带权图，权重必须非负（前置条件，不做检查）
    /// - `source`: 起始节点，必须在 [1, node_count] 范围内
    ///
    /// # 返回
    /// 包含距离与前驱节点的算法结果；起点越界时返回InvalidSource，
    /// 不产生任何部分结果
    pub fn shortest_paths(graph: &Graph, source: usize) -> GraphResult<ShortestPaths> {
        let n = graph.node_count();
        if source < 1 || source > n {
            return Err(GraphError::InvalidSource {
                source,
                node_count: n,
            });
        }

        let mut distances: Vec<Option<i64>> = vec![None; n + 1];
        let mut predecessors: Vec<Option<usize>> = vec![None; n + 1];
        let mut to_visit: BinaryHeap<NodeDistance> = BinaryHeap::new();

        distances[source] = Some(0);
        to_visit.push(NodeDistance {
            node: source,
            distance: 0,
        });

        while let Some(NodeDistance { node: u, distance }) = to_visit.pop() {
            // 过期条目：已记录更优距离时直接丢弃
            if matches!(distances[u], Some(best) if distance > best) {
                continue;
            }

            for &(v, w) in graph.neighbors(u) {
                let new_distance = distance + w;
                if distances[v].map_or(true, |current| new_distance < current) {
                    distances[v] = Some(new_distance);
                    predecessors[v] = Some(u);
                    to_visit.push(NodeDistance {
                        node: v,
                        distance: new_distance,
                    });
                }
            }
        }

        log::debug!(
            "Dijkstra完成: 起点 {}, 可达节点 {} 个",
            source,
            distances.iter().filter(|d| d.is_some()).count()
        );

        Ok(ShortestPaths {
            source,
            distances,
            predecessors,
        })
    }
}
