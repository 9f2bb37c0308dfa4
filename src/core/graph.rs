//! Graph snapshot built from a line-oriented adjacency-list description.
//!
//! One non-blank line per node, numbered by 1-based position among the
//! non-blank lines; each line holds whitespace-separated `<neighbor> <weight>`
//! integer pairs. An undirected edge is expected to be declared on both
//! endpoint lines; the declaration from the lower-numbered endpoint is the
//! one recorded in the edge list, so edges are deduplicated by construction.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::core::error::{GraphError, GraphResult};

/// Undirected weighted edge. Entries in [`Graph::edges`] satisfy `u < v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: i64,
}

/// Immutable weighted undirected graph snapshot.
///
/// Nodes are numbered `1..=node_count`; slot 0 of the adjacency table is
/// present but unused so node ids index directly. Weights may be zero or
/// negative at parse time; Dijkstra requires non-negative weights as a
/// documented precondition, not an enforced invariant.
#[derive(Debug, Clone)]
pub struct Graph {
    node_count: usize,
    adjacency: Vec<Vec<(usize, i64)>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Parses a textual graph description.
    ///
    /// Empty (or all-blank) input yields a valid zero-node graph. Blank lines
    /// are skipped before numbering, so node numbers track the position among
    /// non-blank lines only. A line with an odd token count, a non-integer
    /// token, or a neighbor outside `[1, node_count]` is rejected.
    pub fn parse(text: &str) -> GraphResult<Self> {
        let lines: Vec<&str> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        let node_count = lines.len();

        let mut adjacency = vec![Vec::new(); node_count + 1];
        let mut edges = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            let u = index + 1;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() % 2 != 0 {
                return Err(GraphError::Parse(format!(
                    "节点{}的行包含奇数个整数: {}",
                    u,
                    line.trim()
                )));
            }

            for pair in tokens.chunks_exact(2) {
                let v: usize = pair[0].parse().map_err(|_| {
                    GraphError::Parse(format!("节点{}的邻居编号无效: {}", u, pair[0]))
                })?;
                let weight: i64 = pair[1].parse().map_err(|_| {
                    GraphError::Parse(format!("节点{}的边权重无效: {}", u, pair[1]))
                })?;
                if v < 1 || v > node_count {
                    return Err(GraphError::Parse(format!(
                        "节点{}的邻居{}超出范围 [1, {}]",
                        u, v, node_count
                    )));
                }

                adjacency[u].push((v, weight));
                if u < v {
                    edges.push(Edge { u, v, weight });
                }
            }
        }

        log::debug!("解析完成: {} 个节点, {} 条无向边", node_count, edges.len());

        Ok(Self {
            node_count,
            adjacency,
            edges,
        })
    }

    /// Reads and parses a graph description file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> GraphResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Number of nodes; nodes are numbered `1..=node_count`.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Directed adjacency entries recorded for `node`.
    pub fn neighbors(&self, node: usize) -> &[(usize, i64)] {
        &self.adjacency[node]
    }

    /// Deduplicated undirected edge list (`u < v`), used by Kruskal.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
