/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Multi-threaded PageRank.
//!
//! Nodes are [partitioned](crate::partition) once into as many buckets as
//! threads, and a [Rayon](rayon) thread pool with exactly that number of
//! threads is built once per computation. Both strategy-dependent phases of
//! an iteration (the dangling sum and the rank update) are
//! [broadcast](rayon::ThreadPool::broadcast) to the pool: the thread with
//! index *k* processes bucket *k* only, and returns its partial sum as a
//! value. The broadcast returns when all threads are done, and the partial
//! sums are then added up by the calling thread, so the two phases never
//! overlap and no accumulator is shared among threads.
//!
//! The new ranks are written in place into the shared rank vector through a
//! [`SyncSlice`]: buckets are disjoint, so every slot is written by exactly
//! one thread, and no thread reads the vector being written.

use super::engine::{self, Executor, Update};
use super::{RankComputer, RankParams};
use crate::error::RankError;
use crate::graph::WebGraph;
use crate::partition::{Partition, Policy};
use crate::traits::NodeId;
use dsi_progress_logger::ProgressLog;
use rayon::ThreadPool;
use sync_cell_slice::SyncSlice;

/// PageRank computed by a fixed number of threads.
///
/// ```
/// use webrank::partition::Policy;
/// use webrank::rank::{ParallelPageRank, RankComputer};
///
/// let pr = ParallelPageRank::new(4).policy(Policy::Contiguous);
/// assert_eq!(pr.name(), "ParallelPageRank[4]");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParallelPageRank {
    num_threads: usize,
    policy: Policy,
}

impl ParallelPageRank {
    /// Creates a computer using the given number of threads and the
    /// [round-robin](Policy::RoundRobin) partition policy.
    pub fn new(num_threads: usize) -> Self {
        Self {
            num_threads,
            policy: Policy::default(),
        }
    }

    /// Sets the policy used to assign nodes to threads.
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }
}

impl RankComputer for ParallelPageRank {
    fn name(&self) -> String {
        format!("ParallelPageRank[{}]", self.num_threads)
    }

    fn compute_ranks_with_logging(
        &self,
        graph: &WebGraph,
        params: RankParams,
        pl: &mut impl ProgressLog,
    ) -> Result<Vec<(NodeId, f64)>, RankError> {
        if self.num_threads == 0 {
            return Err(RankError::InvalidNumThreads);
        }
        params.validate()?;

        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.num_threads)
            .thread_name(|i| format!("webrank-{i}"))
            .build()?;
        let partition = Partition::new(graph, self.num_threads, self.policy);
        log::info!(
            "Using {} threads ({} partition)",
            thread_pool.current_num_threads(),
            self.policy
        );

        engine::run(
            graph,
            &params,
            &PoolExecutor {
                thread_pool: &thread_pool,
                partition: &partition,
            },
            pl,
        )
    }
}

/// Runs each phase on a thread pool, one bucket per thread.
struct PoolExecutor<'a> {
    thread_pool: &'a ThreadPool,
    partition: &'a Partition,
}

impl Executor for PoolExecutor<'_> {
    fn dangling_sum(&self, _graph: &WebGraph, previous: &[f64]) -> f64 {
        self.thread_pool
            .broadcast(|ctx| {
                debug_assert_eq!(ctx.num_threads(), self.partition.num_buckets());
                self.partition
                    .dangling(ctx.index())
                    .iter()
                    .map(|&node| previous[node])
                    .sum::<f64>()
            })
            .into_iter()
            .sum()
    }

    fn update(&self, update: &Update<'_>, previous: &[f64], current: &mut [f64]) -> f64 {
        let current = current.as_sync_slice();
        self.thread_pool
            .broadcast(|ctx| {
                debug_assert_eq!(ctx.num_threads(), self.partition.num_buckets());
                let mut delta = 0.0;
                for &node in self.partition.nodes(ctx.index()) {
                    let rank = update.rank(node, previous);
                    delta += (previous[node] - rank).abs();
                    // SAFETY: buckets are disjoint, so no other thread
                    // accesses this slot during the broadcast.
                    unsafe { current[node].set(rank) };
                }
                delta
            })
            .into_iter()
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::SequentialPageRank;

    fn path(n: usize) -> WebGraph {
        WebGraph::from_successors((0..n).map(|i| {
            let succ = if i + 1 < n {
                vec![NodeId::from((i + 1).to_string())]
            } else {
                vec![]
            };
            (NodeId::from(i.to_string()), succ)
        }))
        .unwrap()
    }

    #[test]
    fn test_zero_threads() {
        assert!(matches!(
            ParallelPageRank::new(0).compute_ranks(&path(3), 0.85, 100, 1E-7),
            Err(RankError::InvalidNumThreads)
        ));
    }

    #[test]
    fn test_matches_sequential_on_path() -> Result<(), RankError> {
        let graph = path(20);
        let expected = SequentialPageRank.compute_ranks(&graph, 0.85, 1000, 1E-9)?;
        for num_threads in [1, 2, 3, 7, 20, 32] {
            let ranks = ParallelPageRank::new(num_threads).compute_ranks(&graph, 0.85, 1000, 1E-9)?;
            for ((id0, r0), (id1, r1)) in expected.iter().zip(&ranks) {
                assert_eq!(id0, id1);
                assert!((r0 - r1).abs() < 1E-10, "threads={num_threads} {id0}: {r0} != {r1}");
            }
        }
        Ok(())
    }
}
