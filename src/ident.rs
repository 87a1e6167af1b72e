/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Implementations of [`Identify`].
//!
//! [`Sha256Identifier`] uses as identifier the lowercase hexadecimal SHA-256
//! digest of the content, whereas [`PrefixIdentifier`] just prepends a fixed
//! string to the content, which is handy for tests and synthetic networks.
//! [`Identifier`] wraps both and can be parsed from a string, so it is the
//! type used by the command-line interface.

use crate::traits::{Identify, NodeId};
use sha2::{Digest, Sha256};
use std::str::FromStr;

/// Identifies pages by the SHA-256 digest of their content.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Identifier;

impl Identify for Sha256Identifier {
    fn identify(&self, content: &[u8]) -> NodeId {
        NodeId::from(format!("{:x}", Sha256::digest(content)))
    }
}

/// Identifies pages by their content preceded by a fixed prefix.
#[derive(Debug, Clone, Default)]
pub struct PrefixIdentifier {
    prefix: String,
}

impl PrefixIdentifier {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Identify for PrefixIdentifier {
    fn identify(&self, content: &[u8]) -> NodeId {
        let mut id = self.prefix.clone();
        id.push_str(&String::from_utf8_lossy(content));
        NodeId::from(id)
    }
}

/// An identifier selectable at runtime.
///
/// It parses from `sha256` or `prefix:<PREFIX>`.
#[derive(Debug, Clone)]
pub enum Identifier {
    Sha256(Sha256Identifier),
    Prefix(PrefixIdentifier),
}

impl Default for Identifier {
    fn default() -> Self {
        Identifier::Sha256(Sha256Identifier)
    }
}

impl Identify for Identifier {
    fn identify(&self, content: &[u8]) -> NodeId {
        match self {
            Identifier::Sha256(identifier) => identifier.identify(content),
            Identifier::Prefix(identifier) => identifier.identify(content),
        }
    }
}

impl FromStr for Identifier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.split_once(':') {
            None if s.eq_ignore_ascii_case("sha256") => Ok(Identifier::Sha256(Sha256Identifier)),
            Some((kind, prefix)) if kind.eq_ignore_ascii_case("prefix") => {
                Ok(Identifier::Prefix(PrefixIdentifier::new(prefix)))
            }
            _ => anyhow::bail!("Unknown identifier {s:?}: use \"sha256\" or \"prefix:<PREFIX>\""),
        }
    }
}
