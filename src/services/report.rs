//! 结果呈现模块
//!
//! 将求解结果渲染为稳定的文本报告，供外部展示层显示

use crate::services::algorithm::dijkstra::ShortestPaths;
use crate::services::algorithm::spanning_tree::SpanningTree;

/// 报告格式化结构体
pub struct ReportFormatter;

impl ReportFormatter {
    /// 渲染Prim结果报告
    pub fn prim_report(tree: &SpanningTree) -> String {
        Self::spanning_tree_report("Prim's Minimum Spanning Tree", tree)
    }

    /// 渲染Kruskal结果报告
    pub fn kruskal_report(tree: &SpanningTree) -> String {
        Self::spanning_tree_report("Kruskal's Minimum Spanning Tree", tree)
    }

    fn spanning_tree_report(title: &str, tree: &SpanningTree) -> String {
        let mut report = String::new();
        report.push_str(title);
        report.push('\n');
        report.push_str("Edge\tWeight\n");
        for edge in &tree.edges {
            report.push_str(&format!("{} - {}\t{}\n", edge.u, edge.v, edge.weight));
        }
        report.push_str(&format!("Total Weight: {}\n", tree.total_weight));
        report
    }

    /// 渲染Dijkstra结果报告
    ///
    /// 每个非起点节点一行：不可达时为 `INF\tNo path`，
    /// 否则为最短距离与以 "->" 连接的路径
    pub fn dijkstra_report(paths: &ShortestPaths) -> String {
        let mut report = format!("Dijkstra's Shortest Path from Node {}\n", paths.source());
        report.push_str("Dst\tDist\tPath\n");

        for node in 1..=paths.node_count() {
            if node == paths.source() {
                continue;
            }
            match (paths.distance_to(node), paths.path_to(node)) {
                (Some(distance), Some(path)) => {
                    let joined = path
                        .iter()
                        .map(|n| n.to_string())
                        .collect::<Vec<_>>()
                        .join("->");
                    report.push_str(&format!("{}\t{}\t{}\n", node, distance, joined));
                }
                _ => report.push_str(&format!("{}\tINF\tNo path\n", node)),
            }
        }

        report
    }
}
