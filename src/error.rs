/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Errors of the rank computation.
//!
//! There is no recoverable error in a computation: every variant of
//! [`RankError`] aborts it, and no partial result is ever returned.

use crate::traits::NodeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    /// A page links to an identifier that is not the identifier of any page
    /// of the network.
    #[error("Page {page} links to {target}, which is not part of the graph")]
    UnknownLink { page: NodeId, target: NodeId },

    /// Two pages of the network have the same identifier.
    #[error("Duplicate page identifier {0}")]
    DuplicateNode(NodeId),

    #[error("The damping factor must be in (0 . . 1), got {0}")]
    InvalidAlpha(f64),

    #[error("The tolerance must be a non-negative number, got {0}")]
    InvalidTolerance(f64),

    #[error("The number of threads must be positive")]
    InvalidNumThreads,

    #[error("Cannot build the worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// The result does not contain exactly one rank per node.
    #[error("Invalid result size {actual}, expected {expected}")]
    InvalidResultSize { expected: usize, actual: usize },

    /// The iteration budget was exhausted before the ℓ₁ change between
    /// successive rank vectors fell below the tolerance.
    #[error("Not able to find result in {iterations} iteration(s) (last delta: {delta})")]
    NotConverged { iterations: usize, delta: f64 },
}
