/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Predicates deciding the end of a computation.
//!
//! The engine evaluates [`L1Norm`] after each iteration to detect
//! convergence, and [`MaxIter`] before each iteration to detect the
//! exhaustion of the iteration budget. Both can be combined with the
//! combinators of the [`predicates`] crate.
//!
//! # Examples
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use predicates::prelude::*;
//! use webrank::rank::preds::{L1Norm, MaxIter, PredParams};
//!
//! let predicate = L1Norm::try_from(1E-6)?.or(MaxIter::from(100));
//! assert!(predicate.eval(&PredParams { iteration: 100, delta: 1.0 }));
//! assert!(predicate.eval(&PredParams { iteration: 3, delta: 1E-9 }));
//! assert!(!predicate.eval(&PredParams { iteration: 3, delta: 1.0 }));
//! #     Ok(())
//! # }
//! ```

use crate::error::RankError;
use predicates::{reflection::PredicateReflection, Predicate};
use std::fmt::Display;

/// This structure is passed to stopping predicates to provide the
/// information that is needed to evaluate them.
#[derive(Debug, Clone, Copy)]
pub struct PredParams {
    /// The number of iterations completed so far.
    pub iteration: usize,
    /// The ℓ₁ norm of the difference between the last two rank vectors.
    pub delta: f64,
}

/// Holds once the given number of iterations has been completed.
#[derive(Debug, Clone)]
pub struct MaxIter {
    max_iter: usize,
}

impl MaxIter {
    pub const DEFAULT_MAX_ITER: usize = 100;
}

impl From<usize> for MaxIter {
    fn from(max_iter: usize) -> Self {
        MaxIter { max_iter }
    }
}

impl Default for MaxIter {
    fn default() -> Self {
        Self::from(Self::DEFAULT_MAX_ITER)
    }
}

impl Display for MaxIter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("(max iter: {})", self.max_iter))
    }
}

impl PredicateReflection for MaxIter {}

impl Predicate<PredParams> for MaxIter {
    fn eval(&self, pred_params: &PredParams) -> bool {
        pred_params.iteration >= self.max_iter
    }
}

/// Holds when the ℓ₁ norm of the difference between successive rank vectors
/// is strictly smaller than a given tolerance.
///
/// A tolerance of zero is accepted, but it can only be met by an exact
/// fixed point.
#[derive(Debug, Clone)]
pub struct L1Norm {
    tolerance: f64,
}

impl L1Norm {
    pub const DEFAULT_TOLERANCE: f64 = 1E-7;
}

impl TryFrom<f64> for L1Norm {
    type Error = RankError;
    fn try_from(tolerance: f64) -> Result<Self, RankError> {
        // Also rejects NaN
        if !(tolerance >= 0.0) {
            return Err(RankError::InvalidTolerance(tolerance));
        }
        Ok(L1Norm { tolerance })
    }
}

impl Default for L1Norm {
    fn default() -> Self {
        L1Norm {
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}

impl Display for L1Norm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("(norm: {})", self.tolerance))
    }
}

impl PredicateReflection for L1Norm {}

impl Predicate<PredParams> for L1Norm {
    fn eval(&self, pred_params: &PredParams) -> bool {
        pred_params.delta < self.tolerance
    }
}
