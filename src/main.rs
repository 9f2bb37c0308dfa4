use anyhow::Result;
use clap::{Args, Parser};
use std::path::PathBuf;

use graphalgo::config::Config;
use graphalgo::core::graph::Graph;
use graphalgo::services::algorithm::{Dijkstra, Kruskal, Prim};
use graphalgo::services::engine;
use graphalgo::utils::logging;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "GraphAlgo Contributors")]
enum Cli {
    /// Compute a minimum spanning tree with Prim's algorithm (rooted at node 1)
    Prim(RunArgs),
    /// Compute a minimum spanning forest with Kruskal's algorithm
    Kruskal(RunArgs),
    /// Compute single-source shortest paths with Dijkstra's algorithm
    Dijkstra {
        #[clap(flatten)]
        args: RunArgs,
        /// Source node (1-based)
        #[clap(short, long)]
        source: usize,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Graph description file (one adjacency line per node)
    #[clap(short, long)]
    input: PathBuf,
    /// Write the report to this file instead of stdout
    #[clap(short, long)]
    output: Option<PathBuf>,
    /// Emit the structured result as JSON instead of the textual report
    #[clap(long)]
    json: bool,
    /// Optional TOML configuration file
    #[clap(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let args = match &cli {
        Cli::Prim(args) | Cli::Kruskal(args) => args,
        Cli::Dijkstra { args, .. } => args,
    };

    let config = match &args.config {
        Some(path) => {
            Config::load(path).map_err(|e| anyhow::anyhow!("配置加载失败: {}", e))?
        }
        None => Config::default(),
    };
    logging::init(&config).map_err(|e| anyhow::anyhow!("日志初始化失败: {}", e))?;

    let report = match &cli {
        Cli::Prim(args) => {
            if args.json {
                let graph = Graph::from_file(&args.input)?;
                to_json(&Prim::spanning_tree(&graph))?
            } else {
                engine::run_prim_file(&args.input)?
            }
        }
        Cli::Kruskal(args) => {
            if args.json {
                let graph = Graph::from_file(&args.input)?;
                to_json(&Kruskal::spanning_tree(&graph))?
            } else {
                engine::run_kruskal_file(&args.input)?
            }
        }
        Cli::Dijkstra { args, source } => {
            if args.json {
                let graph = Graph::from_file(&args.input)?;
                to_json(&Dijkstra::shortest_paths(&graph, *source)?)?
            } else {
                engine::run_dijkstra_file(&args.input, *source)?
            }
        }
    };

    match &args.output {
        Some(path) => engine::write_report(path, &report)?,
        None => print!("{}", report),
    }

    logging::shutdown();
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(value)?;
    rendered.push('\n');
    Ok(rendered)
}
