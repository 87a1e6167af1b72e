/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! PageRank by the power method.
//!
//! If we denote with *P* the row-normalized adjacency matrix of the graph
//! (with zero rows for dangling nodes), with **d** the characteristic vector
//! of dangling nodes, with *n* the number of nodes and with α the damping
//! factor, the rank vector is the fixed point of
//!
//! > **x** ↦ α **x** *P*  +  (α **x** · **d** + 1 − α) **1** / *n*,
//!
//! that is, dangling nodes distribute their rank uniformly, and every node
//! jumps uniformly at random with probability 1 − α. Starting from the
//! uniform vector, the map is applied until the ℓ₁ norm of the difference
//! between two successive vectors is strictly smaller than the tolerance. If
//! this does not happen within the given number of iterations, the
//! computation fails with [`RankError::NotConverged`]: there is no partial
//! result.
//!
//! Two [computers](RankComputer) are available:
//! [`SequentialPageRank`](seq::SequentialPageRank), which is the reference
//! implementation, and [`ParallelPageRank`](par::ParallelPageRank), which
//! splits every iteration among a fixed number of threads. They compute the
//! same vector.

mod engine;
pub mod par;
pub mod preds;
pub mod seq;

pub use par::ParallelPageRank;
pub use seq::SequentialPageRank;

use crate::error::RankError;
use crate::graph::{Network, WebGraph};
use crate::traits::{Identify, NodeId};
use dsi_progress_logger::{no_logging, ProgressLog};

pub mod prelude {
    pub use super::par::ParallelPageRank;
    pub use super::preds;
    pub use super::seq::SequentialPageRank;
    pub use super::{RankComputer, RankParams};
}

/// The parameters of a computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankParams {
    /// The damping factor α, in the open interval (0 . . 1).
    pub alpha: f64,
    /// The maximum number of iterations.
    pub iterations: usize,
    /// The convergence tolerance on the ℓ₁ norm of the difference between
    /// successive rank vectors.
    pub tolerance: f64,
}

impl RankParams {
    pub const DEFAULT_ALPHA: f64 = 0.85;
    pub const DEFAULT_ITERATIONS: usize = preds::MaxIter::DEFAULT_MAX_ITER;
    pub const DEFAULT_TOLERANCE: f64 = preds::L1Norm::DEFAULT_TOLERANCE;

    pub fn new(alpha: f64, iterations: usize, tolerance: f64) -> Self {
        Self {
            alpha,
            iterations,
            tolerance,
        }
    }

    /// Checks that the damping factor is in (0 . . 1) and that the tolerance
    /// is a non-negative number.
    pub fn validate(&self) -> Result<(), RankError> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(RankError::InvalidAlpha(self.alpha));
        }
        if !(self.tolerance >= 0.0) {
            return Err(RankError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

impl Default for RankParams {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_ALPHA,
            Self::DEFAULT_ITERATIONS,
            Self::DEFAULT_TOLERANCE,
        )
    }
}

/// A strategy computing PageRank.
///
/// The result of a computation is a vector of pairs made of a node
/// identifier and its rank; pairs are in node-index order, but callers should
/// not rely on any order.
///
/// ```
/// use webrank::prelude::*;
///
/// # fn main() -> Result<(), RankError> {
/// // a → b → c → a
/// let graph = WebGraph::from_successors([
///     (NodeId::from("a"), vec![NodeId::from("b")]),
///     (NodeId::from("b"), vec![NodeId::from("c")]),
///     (NodeId::from("c"), vec![NodeId::from("a")]),
/// ])?;
///
/// let ranks = SequentialPageRank.compute_ranks(&graph, 0.85, 100, 1E-7)?;
/// assert_eq!(ranks.len(), 3);
/// assert!(ranks.iter().all(|(_, rank)| (rank - 1.0 / 3.0).abs() < 1E-4));
///
/// let ranks = ParallelPageRank::new(2).compute_ranks(&graph, 0.85, 100, 1E-7)?;
/// assert!(ranks.iter().all(|(_, rank)| (rank - 1.0 / 3.0).abs() < 1E-4));
/// #     Ok(())
/// # }
/// ```
pub trait RankComputer {
    /// Returns a descriptive name of the strategy.
    fn name(&self) -> String;

    /// Computes PageRank, logging the progress of iterations on `pl`.
    fn compute_ranks_with_logging(
        &self,
        graph: &WebGraph,
        params: RankParams,
        pl: &mut impl ProgressLog,
    ) -> Result<Vec<(NodeId, f64)>, RankError>;

    /// Computes PageRank with damping factor `alpha`, failing if the ℓ₁
    /// norm of the difference between successive approximations does not
    /// become smaller than `tolerance` within `iterations` iterations.
    fn compute_ranks(
        &self,
        graph: &WebGraph,
        alpha: f64,
        iterations: usize,
        tolerance: f64,
    ) -> Result<Vec<(NodeId, f64)>, RankError> {
        self.compute_ranks_with_logging(
            graph,
            RankParams::new(alpha, iterations, tolerance),
            no_logging![],
        )
    }

    /// Builds the graph of a network and computes its PageRank.
    fn compute_for_network(
        &self,
        network: &Network,
        identify: &impl Identify,
        alpha: f64,
        iterations: usize,
        tolerance: f64,
    ) -> Result<Vec<(NodeId, f64)>, RankError> {
        let graph = WebGraph::from_network(network, identify)?;
        self.compute_ranks(&graph, alpha, iterations, tolerance)
    }
}
