//! GraphAlgo - A lightweight in-memory graph algorithms engine implemented in Rust
//!
//! This crate parses weighted undirected graphs from a line-oriented
//! adjacency-list description and computes minimum spanning trees (Prim,
//! Kruskal) and single-source shortest paths with path reconstruction
//! (Dijkstra). The presentation shell consumes either the structured results
//! or the rendered textual reports.

pub mod config;
pub mod core;
pub mod services;
pub mod utils;
