/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Synthetic networks.
//!
//! Pages of generated networks are numbered from zero, and the content of
//! a page is its number in decimal notation. Links are expressed as
//! [content](super::Link::Content), so the identifiers of generated pages
//! depend only on the identifier used to build the graph.

use super::network::{Network, Page};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A generator of networks of given size.
pub trait NetworkGenerator {
    fn generate(&self, size: usize) -> Network;
}

/// A dense network with a deterministic, irregular link structure.
///
/// Page *i* links to page *j* ≠ *i* if
/// ((*i* + 1) · 1337 ⊕ 0xc0ffee) mod *n* > (*j* + 2)(*j* + 7) mod *n*,
/// computed with 32-bit wrapping arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenseGenerator;

impl NetworkGenerator for DenseGenerator {
    fn generate(&self, size: usize) -> Network {
        let n = size as u32;
        let mut network = Network::with_capacity(size);
        for i in 0..n {
            let mut page = Page::new(i.to_string());
            let threshold = ((i.wrapping_add(1)).wrapping_mul(1337) ^ 0xc0ffee) % n;
            for j in 0..n {
                if i != j && threshold > j.wrapping_add(2).wrapping_mul(j.wrapping_add(7)) % n {
                    page.add_link_to(j.to_string());
                }
            }
            network.add_page(page);
        }
        network
    }
}

/// A large, mostly dangling network.
///
/// The first *n* / 1000 pages form a core in which page *i* links to page
/// *j* < *i* if (*i* + *j*) mod 7 = 3; among the remaining pages, page *i*
/// links to page *i* − 127 if *i* mod 1000 = 333. All other pages are
/// dangling.
#[derive(Debug, Clone, Copy, Default)]
pub struct SparseGenerator;

impl NetworkGenerator for SparseGenerator {
    fn generate(&self, size: usize) -> Network {
        let core_size = size / 1000;
        let mut network = Network::with_capacity(size);
        for i in 0..core_size {
            let mut page = Page::new(i.to_string());
            for j in (0..i).filter(|j| (i + j) % 7 == 3) {
                page.add_link_to(j.to_string());
            }
            network.add_page(page);
        }
        for i in core_size..size {
            let mut page = Page::new(i.to_string());
            if i % 1000 == 333 {
                page.add_link_to((i - 127).to_string());
            }
            network.add_page(page);
        }
        network
    }
}

/// An Erdős–Rényi network: each arc *i* → *j*, *i* ≠ *j*, is present
/// independently with probability *p*.
#[derive(Debug, Clone, Copy)]
pub struct RandomGenerator {
    p: f64,
    seed: u64,
}

impl RandomGenerator {
    /// Creates a new generator with arc probability `p` and the given seed.
    ///
    /// # Panics
    ///
    /// Panics if `p` is not in the interval [0 . . 1].
    pub fn new(p: f64, seed: u64) -> Self {
        assert!(
            (0.0..=1.0).contains(&p),
            "The arc probability must be in [0 . . 1], got {p}"
        );
        Self { p, seed }
    }
}

impl NetworkGenerator for RandomGenerator {
    fn generate(&self, size: usize) -> Network {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut network = Network::with_capacity(size);
        for i in 0..size {
            let mut page = Page::new(i.to_string());
            for j in 0..size {
                if i != j && rng.random_bool(self.p) {
                    page.add_link_to(j.to_string());
                }
            }
            network.add_page(page);
        }
        network
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Link, WebGraph};
    use crate::ident::PrefixIdentifier;

    #[test]
    fn test_dense() {
        let network = DenseGenerator.generate(100);
        assert_eq!(network.num_pages(), 100);
        for (i, page) in network.pages().iter().enumerate() {
            assert_eq!(page.content(), i.to_string());
            assert!(!page.links().contains(&Link::Content(i.to_string())));
        }
        let num_links: usize = network.pages().iter().map(|p| p.links().len()).sum();
        assert!(num_links > 0);
    }

    #[test]
    fn test_sparse() {
        let network = SparseGenerator.generate(5000);
        assert_eq!(network.num_pages(), 5000);
        // Core of 5 pages: 2 → 1 and 3 → 0
        assert_eq!(network.pages()[2].links(), &[Link::Content("1".into())]);
        assert_eq!(network.pages()[3].links(), &[Link::Content("0".into())]);
        assert!(network.pages()[4].links().is_empty());
        assert_eq!(
            network.pages()[1333].links(),
            &[Link::Content("1206".into())]
        );
        assert!(network.pages()[1334].links().is_empty());
        let graph = WebGraph::from_network(&network, &PrefixIdentifier::default()).unwrap();
        assert_eq!(graph.num_arcs(), 2 + 5);
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = RandomGenerator::new(0.1, 42).generate(50);
        let b = RandomGenerator::new(0.1, 42).generate(50);
        assert_eq!(a, b);
        assert!(RandomGenerator::new(0.0, 0)
            .generate(10)
            .pages()
            .iter()
            .all(|p| p.links().is_empty()));
    }
}
