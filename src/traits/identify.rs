/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::borrow::Borrow;
use std::fmt::Display;

/// The identifier of a page.
///
/// Identifiers are opaque strings, usually obtained from the content of a
/// page through an implementation of [`Identify`]. They are compared, hashed
/// and ordered as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Box<str>);

impl NodeId {
    pub fn new(id: impl Into<Box<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Maps the content of a page to its [identifier](NodeId).
///
/// Implementations must be deterministic (the same content always yields the
/// same identifier) and must not map two distinct contents of the same
/// network to the same identifier: graph construction rejects networks in
/// which two pages share an identifier.
///
/// Identification happens once, when a [`WebGraph`](crate::graph::WebGraph)
/// is built; the rank computation only sees the resulting identifiers.
pub trait Identify {
    fn identify(&self, content: &[u8]) -> NodeId;
}
