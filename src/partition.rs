/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Static assignment of nodes to workers.
//!
//! A [`Partition`] splits the nodes of a [`WebGraph`], and separately its
//! dangling nodes, into a fixed number of disjoint buckets, one per worker.
//! It is computed once per computation and never changes: nodes do not
//! migrate between buckets as ranks evolve. The rank vector does not depend
//! on the number of buckets or on the [policy](Policy) used to fill them.

use crate::graph::WebGraph;

/// The policy used to assign nodes to buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// The *i*-th node goes to bucket *i* mod *w*.
    #[default]
    RoundRobin,
    /// Nodes are split into *w* consecutive blocks whose sizes differ at most
    /// by one.
    Contiguous,
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::RoundRobin => f.write_str("round-robin"),
            Policy::Contiguous => f.write_str("contiguous"),
        }
    }
}

/// Disjoint buckets of node indices and of dangling-node indices.
///
/// ```
/// use webrank::graph::WebGraph;
/// use webrank::partition::{Partition, Policy};
/// use webrank::traits::NodeId;
///
/// # fn main() -> Result<(), webrank::error::RankError> {
/// let graph = WebGraph::from_successors(
///     ["a", "b", "c"].map(|id| (NodeId::from(id), Vec::<NodeId>::new())),
/// )?;
/// let partition = Partition::new(&graph, 2, Policy::RoundRobin);
/// assert_eq!(partition.nodes(0), &[0, 2]);
/// assert_eq!(partition.nodes(1), &[1]);
/// assert_eq!(partition.dangling(1), &[1]);
/// #     Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Partition {
    nodes: Box<[Box<[usize]>]>,
    dangling: Box<[Box<[usize]>]>,
}

impl Partition {
    /// Partitions the nodes of `graph` into `num_buckets` buckets.
    ///
    /// Buckets may be empty if there are more buckets than nodes.
    ///
    /// # Panics
    ///
    /// Panics if `num_buckets` is zero.
    pub fn new(graph: &WebGraph, num_buckets: usize, policy: Policy) -> Self {
        assert!(num_buckets > 0, "The number of buckets must be positive");
        Self {
            nodes: split(0..graph.num_nodes(), num_buckets, policy),
            dangling: split(graph.dangling().iter().copied(), num_buckets, policy),
        }
    }

    /// Partitions with the [round-robin policy](Policy::RoundRobin).
    pub fn round_robin(graph: &WebGraph, num_buckets: usize) -> Self {
        Self::new(graph, num_buckets, Policy::RoundRobin)
    }

    pub fn num_buckets(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the nodes assigned to the given bucket, in increasing order.
    pub fn nodes(&self, bucket: usize) -> &[usize] {
        &self.nodes[bucket]
    }

    /// Returns the dangling nodes assigned to the given bucket, in increasing
    /// order.
    pub fn dangling(&self, bucket: usize) -> &[usize] {
        &self.dangling[bucket]
    }
}

fn split(
    items: impl ExactSizeIterator<Item = usize>,
    num_buckets: usize,
    policy: Policy,
) -> Box<[Box<[usize]>]> {
    let len = items.len();
    let mut buckets = vec![Vec::with_capacity(len.div_ceil(num_buckets)); num_buckets];
    match policy {
        Policy::RoundRobin => {
            for (i, item) in items.enumerate() {
                buckets[i % num_buckets].push(item);
            }
        }
        Policy::Contiguous => {
            // Bucket k receives positions [k * len / w . . (k + 1) * len / w)
            let mut bucket = 0;
            for (i, item) in items.enumerate() {
                while i >= (bucket + 1) * len / num_buckets {
                    bucket += 1;
                }
                buckets[bucket].push(item);
            }
        }
    }
    buckets.into_iter().map(Vec::into_boxed_slice).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::NodeId;

    /// Nodes 0..n, where multiples of 3 are dangling and all other nodes
    /// link to node 0.
    fn graph(n: usize) -> WebGraph {
        WebGraph::from_successors((0..n).map(|i| {
            let succ = if i % 3 == 0 {
                vec![]
            } else {
                vec![NodeId::from("0")]
            };
            (NodeId::from(i.to_string()), succ)
        }))
        .unwrap()
    }

    fn check_cover(partition: &Partition, graph: &WebGraph) {
        let mut nodes = (0..partition.num_buckets())
            .flat_map(|b| partition.nodes(b).iter().copied())
            .collect::<Vec<_>>();
        nodes.sort();
        assert_eq!(nodes, (0..graph.num_nodes()).collect::<Vec<_>>());

        let mut dangling = (0..partition.num_buckets())
            .flat_map(|b| partition.dangling(b).iter().copied())
            .collect::<Vec<_>>();
        dangling.sort();
        assert_eq!(dangling, graph.dangling());
    }

    #[test]
    fn test_round_robin() {
        let g = graph(10);
        for w in 1..=12 {
            let partition = Partition::round_robin(&g, w);
            assert_eq!(partition.num_buckets(), w);
            check_cover(&partition, &g);
            for b in 0..w {
                assert!(partition.nodes(b).iter().all(|&i| i % w == b));
            }
        }
        // Dangling nodes are 0, 3, 6, 9, dealt in their own order
        let partition = Partition::round_robin(&g, 3);
        assert_eq!(partition.dangling(0), &[0, 9]);
        assert_eq!(partition.dangling(1), &[3]);
        assert_eq!(partition.dangling(2), &[6]);
    }

    #[test]
    fn test_contiguous() {
        let g = graph(10);
        for w in 1..=12 {
            let partition = Partition::new(&g, w, Policy::Contiguous);
            check_cover(&partition, &g);
            let sizes = (0..w).map(|b| partition.nodes(b).len()).collect::<Vec<_>>();
            let min = *sizes.iter().min().unwrap();
            let max = *sizes.iter().max().unwrap();
            assert!(max - min <= 1, "w={w} sizes={sizes:?}");
            for b in 0..w {
                assert!(partition.nodes(b).windows(2).all(|p| p[1] == p[0] + 1));
            }
        }
        let partition = Partition::new(&g, 3, Policy::Contiguous);
        assert_eq!(partition.nodes(0), &[0, 1, 2]);
        assert_eq!(partition.nodes(1), &[3, 4, 5]);
        assert_eq!(partition.nodes(2), &[6, 7, 8, 9]);
    }

    #[test]
    fn test_more_buckets_than_nodes() {
        let g = graph(2);
        let partition = Partition::round_robin(&g, 5);
        assert_eq!(partition.nodes(0), &[0]);
        assert_eq!(partition.nodes(1), &[1]);
        assert!((2..5).all(|b| partition.nodes(b).is_empty()));
    }

    #[test]
    #[should_panic]
    fn test_zero_buckets() {
        Partition::round_robin(&graph(3), 0);
    }
}
