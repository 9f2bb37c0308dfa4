//! 引擎门面模块
//!
//! 提供外部展示层使用的一次性求解接口：传入图描述（原始文本或
//! 文件路径）与起点编号，返回渲染后的文本报告。每次调用都在独立的
//! 图快照上完成解析、求解与渲染，调用之间没有共享可变状态。

use std::fs;
use std::path::Path;

use crate::core::error::GraphResult;
use crate::core::graph::Graph;
use crate::services::algorithm::{Dijkstra, Kruskal, Prim};
use crate::services::report::ReportFormatter;

/// 对原始文本执行Prim算法并渲染报告
pub fn run_prim(text: &str) -> GraphResult<String> {
    let graph = Graph::parse(text)?;
    let tree = Prim::spanning_tree(&graph);
    log::info!("Prim求解完成: {} 条边", tree.edge_count());
    Ok(ReportFormatter::prim_report(&tree))
}

/// 对原始文本执行Kruskal算法并渲染报告
pub fn run_kruskal(text: &str) -> GraphResult<String> {
    let graph = Graph::parse(text)?;
    let tree = Kruskal::spanning_tree(&graph);
    log::info!("Kruskal求解完成: {} 条边", tree.edge_count());
    Ok(ReportFormatter::kruskal_report(&tree))
}

/// 对原始文本执行Dijkstra算法并渲染报告
pub fn run_dijkstra(text: &str, source: usize) -> GraphResult<String> {
    let graph = Graph::parse(text)?;
    let paths = Dijkstra::shortest_paths(&graph, source)?;
    log::info!("Dijkstra求解完成: 起点 {}", source);
    Ok(ReportFormatter::dijkstra_report(&paths))
}

/// 对图描述文件执行Prim算法并渲染报告
pub fn run_prim_file<P: AsRef<Path>>(path: P) -> GraphResult<String> {
    run_prim(&read_description(path)?)
}

/// 对图描述文件执行Kruskal算法并渲染报告
pub fn run_kruskal_file<P: AsRef<Path>>(path: P) -> GraphResult<String> {
    run_kruskal(&read_description(path)?)
}

/// 对图描述文件执行Dijkstra算法并渲染报告
pub fn run_dijkstra_file<P: AsRef<Path>>(path: P, source: usize) -> GraphResult<String> {
    run_dijkstra(&read_description(path)?, source)
}

/// 将渲染后的报告写入文件
///
/// 写入失败返回IO错误，内存中的结果不受影响，调用方可重试
pub fn write_report<P: AsRef<Path>>(path: P, report: &str) -> GraphResult<()> {
    fs::write(path, report)?;
    Ok(())
}

fn read_description<P: AsRef<Path>>(path: P) -> GraphResult<String> {
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GraphError;

    #[test]
    fn test_run_prim_renders_report() {
        let report = run_prim("2 4 3 1\n1 4 3 2\n1 1 2 2\n").expect("prim should succeed in test");
        assert!(report.starts_with("Prim's Minimum Spanning Tree\n"));
        assert!(report.ends_with("Total Weight: 3\n"));
    }

    #[test]
    fn test_run_dijkstra_propagates_invalid_source() {
        let err = run_dijkstra("2 1\n1 1\n", 7).expect_err("bad source must fail in test");
        assert_eq!(
            err,
            GraphError::InvalidSource {
                source: 7,
                node_count: 2
            }
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = run_kruskal_file("no-such-file.txt").expect_err("missing file must fail in test");
        assert!(matches!(err, GraphError::Io(_)));
    }
}
