//! Reader for the line-oriented edge-list format.
//!
//! ```text
//! c comment lines start with `c`
//! p edge 4
//! 1 2
//! 2 3
//! ```
//!
//! The problem line is split on single spaces and its third token declares the
//! vertex count, which may not exceed [`MAX_VERTICES`]. Every later non-comment line holds one undirected edge.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use colref_core::errors::{ColrefError, ErrorInfo, ParseErrorKind};
use colref_core::VertexId;
use tracing::debug;

use crate::graph::Graph;

/// Largest vertex count a problem line may declare.
pub const MAX_VERTICES: u32 = 1 << 24;

/// Reads and parses the graph stored at `path`.
pub fn read_graph(path: &Path) -> Result<Graph, ColrefError> {
    let file = File::open(path).map_err(|err| {
        ColrefError::Io(
            ErrorInfo::new("open-graph", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    let graph = parse_edge_list(BufReader::new(file))
        .map_err(|err| err.with_context("path", path.display()))?;
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "parsed {}",
        path.display()
    );
    Ok(graph)
}

/// Parses an edge list held in memory.
pub fn parse_str(text: &str) -> Result<Graph, ColrefError> {
    parse_edge_list(text.as_bytes())
}

/// Parses an edge list from a buffered reader, consuming it.
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<Graph, ColrefError> {
    let mut graph: Option<Graph> = None;
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|err| {
            ColrefError::Io(ErrorInfo::new("read-graph", err.to_string()))
                .with_context("line", line_no)
        })?;
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }

        if line.starts_with('p') {
            if graph.is_some() {
                return Err(parse_error(
                    ParseErrorKind::DuplicateProblemLine,
                    "only one problem line may appear",
                    line_no,
                ));
            }
            graph = Some(parse_problem_line(line, line_no)?);
            continue;
        }

        let Some(graph) = graph.as_mut() else {
            return Err(parse_error(
                ParseErrorKind::EdgeBeforeProblemLine,
                "encountered a non-comment line before the problem line",
                line_no,
            ));
        };
        let mut tokens = line.split_whitespace();
        let (Some(tail), Some(head)) = (tokens.next(), tokens.next()) else {
            return Err(parse_error(
                ParseErrorKind::MalformedEdgeLine,
                "edge lines need a tail and a head",
                line_no,
            ));
        };
        let tail = VertexId::from_raw(parse_integer(tail, line_no)?);
        let head = VertexId::from_raw(parse_integer(head, line_no)?);
        graph
            .add_edge(tail, head)
            .map_err(|err| err.with_context("line", line_no))?;
    }

    graph.ok_or_else(|| {
        ColrefError::Parse(
            ErrorInfo::new(
                ParseErrorKind::MissingProblemLine.code(),
                "input does not contain a problem line",
            )
            .with_hint("declare the vertex count with a line such as `p edge 4`"),
        )
    })
}

fn parse_problem_line(line: &str, line_no: usize) -> Result<Graph, ColrefError> {
    let words: Vec<&str> = line.split(' ').collect();
    if words.len() < 3 {
        return Err(parse_error(
            ParseErrorKind::MalformedProblemLine,
            "the problem line has too few words",
            line_no,
        )
        .with_context("words", words.len()));
    }
    let count: u32 = parse_integer(words[2], line_no)?;
    if count > MAX_VERTICES {
        return Err(parse_error(
            ParseErrorKind::VertexLimitExceeded,
            "the problem line declares too many vertices",
            line_no,
        )
        .with_context("declared", count)
        .with_context("limit", MAX_VERTICES));
    }
    let mut graph = Graph::new();
    for raw in 1..=count {
        graph.add_vertex(VertexId::from_raw(raw))?;
    }
    Ok(graph)
}

fn parse_integer<T: FromStr>(token: &str, line_no: usize) -> Result<T, ColrefError> {
    token.parse().map_err(|_| {
        parse_error(
            ParseErrorKind::InvalidInteger,
            "expected a non-negative integer",
            line_no,
        )
        .with_context("token", token)
    })
}

fn parse_error(kind: ParseErrorKind, message: &str, line_no: usize) -> ColrefError {
    ColrefError::Parse(ErrorInfo::new(kind.code(), message)).with_context("line", line_no)
}
