/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
// for now we don't need any new feature but we might remove this in the future
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

pub mod error;
pub mod graph;
pub mod ident;
pub mod partition;
pub mod rank;
pub mod results;
pub mod traits;

#[cfg(feature = "cli")]
pub mod cli;

/// Prelude module to import everything from this crate
pub mod prelude {
    pub use crate::error::RankError;
    pub use crate::graph::prelude::*;
    pub use crate::ident::*;
    pub use crate::partition::{Partition, Policy};
    pub use crate::rank::prelude::*;
    pub use crate::results::*;
    pub use crate::traits::*;
}
