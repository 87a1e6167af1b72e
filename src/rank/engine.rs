/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The power-method iteration shared by all execution strategies.
//!
//! Ranks live in two flat arrays indexed by node: `previous`, a read-only
//! snapshot of the last approximation, and `current`, which is overwritten
//! in its entirety at each iteration. An iteration consists of the following
//! steps, in this order:
//!
//! 1. `previous` and `current` are swapped;
//! 2. the rank of dangling nodes in `previous` is summed;
//! 3. the base value
//!    *b* = (α · *dangling* + 1 − α) / *n*
//!    is computed once;
//! 4. every node *p* gets
//!    *b* + α ∑_(*q* → *p*) `previous`\[*q*\] / *d*(*q*), and the ℓ₁ norm
//!    of the difference with `previous` is accumulated.
//!
//! Steps 2 and 4 are delegated to an [`Executor`]; everything else, including
//! the stopping decision, happens here.

use super::preds::{L1Norm, MaxIter, PredParams};
use super::RankParams;
use crate::error::RankError;
use crate::graph::WebGraph;
use crate::traits::NodeId;
use dsi_progress_logger::ProgressLog;
use predicates::Predicate;

/// The data needed to update the rank of a node, fixed for an iteration.
pub(crate) struct Update<'a> {
    pub(crate) graph: &'a WebGraph,
    pub(crate) inv_outdegrees: &'a [f64],
    pub(crate) alpha: f64,
    pub(crate) base: f64,
}

impl Update<'_> {
    /// Returns the new rank of `node` given the previous rank vector.
    #[inline(always)]
    pub(crate) fn rank(&self, node: usize, previous: &[f64]) -> f64 {
        let mut sigma = 0.0;
        for &q in self.graph.predecessors(node) {
            debug_assert!(self.inv_outdegrees[q] > 0.0);
            sigma += previous[q] * self.inv_outdegrees[q];
        }
        self.base + self.alpha * sigma
    }
}

/// The two phases of an iteration that depend on the execution strategy.
pub(crate) trait Executor {
    /// Returns the sum of the ranks of dangling nodes.
    fn dangling_sum(&self, graph: &WebGraph, previous: &[f64]) -> f64;

    /// Writes the new rank of every node into `current` and returns the ℓ₁
    /// norm of the difference between `previous` and `current`.
    fn update(&self, update: &Update<'_>, previous: &[f64], current: &mut [f64]) -> f64;
}

/// Runs the power method with the given executor until convergence.
///
/// The result contains one pair per node, in index order.
pub(crate) fn run(
    graph: &WebGraph,
    params: &RankParams,
    executor: &impl Executor,
    pl: &mut impl ProgressLog,
) -> Result<Vec<(NodeId, f64)>, RankError> {
    params.validate()?;
    let converged = L1Norm::try_from(params.tolerance)?;
    let exhausted = MaxIter::from(params.iterations);
    let alpha = params.alpha;

    let n = graph.num_nodes();
    if n == 0 {
        return Ok(Vec::new());
    }

    log::info!("Alpha: {}", alpha);
    log::info!("Stopping criterion: {}, failing at {}", converged, exhausted);
    log::info!("{} dangling nodes", graph.dangling().len());

    let inv_n = 1.0 / n as f64;
    let inv_outdegrees = (0..n)
        .map(|node| match graph.outdegree(node) {
            0 => 0.0,
            d => 1.0 / d as f64,
        })
        .collect::<Box<[f64]>>();

    let mut current = vec![inv_n; n].into_boxed_slice();
    let mut previous = vec![0.0; n].into_boxed_slice();
    let mut pred_params = PredParams {
        iteration: 0,
        delta: f64::INFINITY,
    };

    pl.item_name("iteration");
    pl.expected_updates(Some(params.iterations));
    pl.start(format!("Computing PageRank (alpha={alpha})..."));

    loop {
        if exhausted.eval(&pred_params) {
            pl.done();
            return Err(RankError::NotConverged {
                iterations: pred_params.iteration,
                delta: pred_params.delta,
            });
        }

        std::mem::swap(&mut current, &mut previous);

        let dangling_mass = alpha * executor.dangling_sum(graph, &previous);
        // Identical for every node and every worker of this iteration
        let base = dangling_mass * inv_n + (1.0 - alpha) * inv_n;

        let update = Update {
            graph,
            inv_outdegrees: &inv_outdegrees,
            alpha,
            base,
        };
        pred_params.delta = executor.update(&update, &previous, &mut current);
        pred_params.iteration += 1;

        log::debug!(
            "Iteration {}: delta = {}",
            pred_params.iteration,
            pred_params.delta
        );
        pl.update_and_display();

        if converged.eval(&pred_params) {
            break;
        }
    }

    pl.done();
    log::info!(
        "Converged after {} iteration(s), delta = {}",
        pred_params.iteration,
        pred_params.delta
    );

    let result = graph
        .ids()
        .iter()
        .cloned()
        .zip(current.iter().copied())
        .collect::<Vec<_>>();
    if result.len() != n {
        return Err(RankError::InvalidResultSize {
            expected: n,
            actual: result.len(),
        });
    }
    Ok(result)
}
