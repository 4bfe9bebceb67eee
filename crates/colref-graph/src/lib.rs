#![deny(missing_docs)]
#![doc = "Undirected multigraph model with a line-oriented edge-list reader."]

mod generators;
mod graph;
mod parse;

pub use generators::{complete, cycle, path, random_gnm, star};
pub use graph::Graph;
pub use parse::{parse_edge_list, parse_str, read_graph, MAX_VERTICES};
