use colref_core::errors::{ColrefError, ErrorInfo};
use colref_core::VertexId;
use colref_graph::Graph;
use rayon::prelude::*;

use crate::signature::Signature;
use crate::slot;

/// One round of signature exchange, computed on a single thread.
///
/// The new signature of `w` is the sorted concatenation of the current
/// signatures of every neighbour of `w`, with loops and parallel edges counted
/// once per adjacency entry. The input map is only read, so every vertex sees
/// the previous round's values.
pub fn propagate(graph: &Graph, signatures: &[Signature]) -> Vec<Signature> {
    graph
        .adjacency()
        .iter()
        .map(|neighbours| gather(neighbours, signatures))
        .collect()
}

/// Same as [`propagate`], fanned out over the current rayon pool.
pub fn propagate_parallel(graph: &Graph, signatures: &[Signature]) -> Vec<Signature> {
    graph
        .adjacency()
        .par_iter()
        .map(|neighbours| gather(neighbours, signatures))
        .collect()
}

fn gather(neighbours: &[VertexId], signatures: &[Signature]) -> Signature {
    let capacity = neighbours
        .iter()
        .map(|&v| signatures[slot(v)].len())
        .sum();
    let mut entries = Vec::with_capacity(capacity);
    for &v in neighbours {
        entries.extend_from_slice(signatures[slot(v)].entries());
    }
    Signature::from_entries(entries)
}

/// Where the propagation step runs.
#[derive(Debug, Default)]
pub enum Executor {
    /// On the calling thread.
    #[default]
    Sequential,
    /// On a dedicated rayon pool.
    Pool(rayon::ThreadPool),
}

impl Executor {
    /// Sequential for `threads <= 1`, otherwise a pool with that many workers.
    pub fn with_threads(threads: usize) -> Result<Self, ColrefError> {
        if threads <= 1 {
            return Ok(Executor::Sequential);
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|err| {
                ColrefError::Config(
                    ErrorInfo::new("thread-pool", err.to_string())
                        .with_context("threads", threads.to_string()),
                )
            })?;
        Ok(Executor::Pool(pool))
    }

    /// Number of worker threads used by the step.
    pub fn threads(&self) -> usize {
        match self {
            Executor::Sequential => 1,
            Executor::Pool(pool) => pool.current_num_threads(),
        }
    }

    /// Runs one propagation round.
    pub fn propagate(&self, graph: &Graph, signatures: &[Signature]) -> Vec<Signature> {
        match self {
            Executor::Sequential => propagate(graph, signatures),
            Executor::Pool(pool) => pool.install(|| propagate_parallel(graph, signatures)),
        }
    }
}
