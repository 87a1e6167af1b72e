/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::engine::{self, Executor, Update};
use super::{RankComputer, RankParams};
use crate::error::RankError;
use crate::graph::WebGraph;
use crate::traits::NodeId;
use dsi_progress_logger::ProgressLog;

/// Single-threaded PageRank.
///
/// This is the reference implementation: every phase of every iteration is a
/// plain loop over nodes in index order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialPageRank;

impl Executor for SequentialPageRank {
    fn dangling_sum(&self, graph: &WebGraph, previous: &[f64]) -> f64 {
        graph.dangling().iter().map(|&node| previous[node]).sum()
    }

    fn update(&self, update: &Update<'_>, previous: &[f64], current: &mut [f64]) -> f64 {
        let mut delta = 0.0;
        for (node, rank) in current.iter_mut().enumerate() {
            *rank = update.rank(node, previous);
            delta += (previous[node] - *rank).abs();
        }
        delta
    }
}

impl RankComputer for SequentialPageRank {
    fn name(&self) -> String {
        "SequentialPageRank".to_owned()
    }

    fn compute_ranks_with_logging(
        &self,
        graph: &WebGraph,
        params: RankParams,
        pl: &mut impl ProgressLog,
    ) -> Result<Vec<(NodeId, f64)>, RankError> {
        engine::run(graph, &params, self, pl)
    }
}
