/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Networks of pages and the immutable graphs built from them.
//!
//! A [`Network`] is the raw input of a computation: a list of
//! [pages](Page), each with its content and its outbound links. A
//! [`WebGraph`] is built once from a network (or directly from successor
//! lists of identifiers) and assigns to every page a dense index, which is
//! what the rank computation works with.

pub mod generators;
pub mod network;
pub mod web_graph;

pub use network::{Link, Network, Page};
pub use web_graph::WebGraph;

pub mod prelude {
    pub use super::generators::*;
    pub use super::network::*;
    pub use super::web_graph::*;
}
