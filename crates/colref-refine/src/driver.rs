//! Fixpoint loop driving propagation and sorting.
//!
//! The run moves through `Init → Sorting → (Propagating → Sorting)* → Done`.
//! After every sort the visiting order is compared with the order captured by
//! the previous sort; the loop ends once the two are equal. The first
//! comparison is against no order at all, so at least one propagation round
//! always runs.
//!
//! Termination looks only at the order of vertex ids. Two different signature
//! assignments inducing the same order are treated as a fixpoint, which can
//! under-refine some inputs.
//!
//! The loop is not guaranteed to end. On some inputs, simple graphs included,
//! the order alternates between two states while signatures keep growing.
//! Set [`RefineConfig::max_rounds`] to bound such runs; a capped run reports
//! `converged: false`.

use colref_core::errors::ColrefError;
use colref_core::VertexId;
use colref_graph::Graph;
use tracing::{debug, info, warn};

use crate::config::RefineConfig;
use crate::hash::{graph_hash, order_digest};
use crate::propagate::Executor;
use crate::report::{RefinementReport, RoundReport};
use crate::state::RefinementState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Init,
    Sorting,
    Propagating,
    Done,
}

/// Runs refinements with a fixed configuration.
#[derive(Debug)]
pub struct Refiner {
    config: RefineConfig,
    executor: Executor,
}

impl Default for Refiner {
    fn default() -> Self {
        Self {
            config: RefineConfig::default(),
            executor: Executor::Sequential,
        }
    }
}

impl Refiner {
    /// Validates the configuration and prepares the propagation executor.
    pub fn new(config: RefineConfig) -> Result<Self, ColrefError> {
        config.validate()?;
        let executor = Executor::with_threads(config.threads)?;
        Ok(Self { config, executor })
    }

    /// The configuration in use.
    pub fn config(&self) -> &RefineConfig {
        &self.config
    }

    /// Refines `graph` until its vertex order is stable.
    pub fn run(&self, graph: Graph) -> RefinementReport {
        let input_hash = graph_hash(&graph);
        let mut state = RefinementState::new(graph);
        let regular_degree = state.graph().regular_degree();

        let mut phase = Phase::Init;
        let mut previous: Option<Vec<VertexId>> = None;
        let mut current: Vec<VertexId> = Vec::new();
        let mut rounds = 0usize;
        let mut sort_passes = 0usize;
        let mut converged = true;
        let mut history = Vec::new();

        loop {
            phase = match phase {
                Phase::Init => {
                    if let Some(degree) = regular_degree {
                        warn!("input graph is {degree}-regular; vertices will not be ordered");
                    }
                    debug!(
                        threads = self.executor.threads(),
                        "refining local structure of graph\n{state}"
                    );
                    Phase::Sorting
                }
                Phase::Sorting => {
                    state.sort_vertices();
                    sort_passes += 1;
                    current = state.snapshot_order();
                    if rounds == 0 {
                        debug!("initial sort\n{state}");
                    } else {
                        let order_changed = previous.as_ref() != Some(&current);
                        info!(
                            round = rounds,
                            order_changed,
                            max_signature_len = state.max_signature_len(),
                            total_signature_len = state.total_signature_len(),
                            "refinement round {rounds} completed"
                        );
                        debug!("after round {rounds}\n{state}");
                        if self.config.record_rounds {
                            history.push(RoundReport {
                                round: rounds,
                                order_changed,
                                max_signature_len: state.max_signature_len(),
                                total_signature_len: state.total_signature_len(),
                                distinct_keys: state.distinct_keys(),
                            });
                        }
                    }

                    if previous.as_ref() == Some(&current) {
                        Phase::Done
                    } else if self.config.max_rounds.is_some_and(|cap| rounds >= cap) {
                        warn!(rounds, "round cap reached before the order stabilised");
                        converged = false;
                        Phase::Done
                    } else {
                        previous = Some(current.clone());
                        Phase::Propagating
                    }
                }
                Phase::Propagating => {
                    state.propagate(&self.executor);
                    rounds += 1;
                    Phase::Sorting
                }
                Phase::Done => break,
            };
        }

        info!(rounds, converged, "final order {:?}", raw_ids(&current));
        RefinementReport {
            order_digest: order_digest(&current),
            order: current,
            rounds,
            sort_passes,
            converged,
            regular_degree,
            base: state.base(),
            vertex_count: state.graph().vertex_count(),
            edge_count: state.graph().edge_count(),
            max_signature_len: state.max_signature_len(),
            distinct_keys: state.distinct_keys(),
            history,
            graph_hash: input_hash,
        }
    }
}

/// Refines `graph` sequentially with the default configuration.
pub fn refine(graph: Graph) -> RefinementReport {
    Refiner::default().run(graph)
}

fn raw_ids(order: &[VertexId]) -> Vec<u32> {
    order.iter().map(VertexId::as_raw).collect()
}
