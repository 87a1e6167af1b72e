/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::network::Network;
use crate::error::RankError;
use crate::traits::{Identify, NodeId};
use std::collections::HashMap;

/// An immutable, index-based directed graph of pages.
///
/// Every node is assigned a dense index in `0..num_nodes()` following the
/// order in which nodes were provided; ranks are stored in flat arrays
/// addressed by this index. Besides successor lists, the graph stores
/// predecessor lists (the transpose is needed by the rank update), outdegrees
/// and the list of dangling nodes, that is, nodes without outbound links.
///
/// Both successor and predecessor lists are stored in compressed sparse row
/// form. Predecessor lists are sorted by source index, and parallel arcs are
/// kept: a page linking twice to the same target has outdegree two and
/// appears twice among the predecessors of the target.
///
/// ```
/// use webrank::graph::WebGraph;
/// use webrank::traits::NodeId;
///
/// # fn main() -> Result<(), webrank::error::RankError> {
/// let graph = WebGraph::from_successors([
///     (NodeId::from("a"), vec![NodeId::from("b")]),
///     (NodeId::from("b"), vec![]),
/// ])?;
/// assert_eq!(graph.num_nodes(), 2);
/// assert_eq!(graph.predecessors(1), &[0]);
/// assert_eq!(graph.dangling(), &[1]);
/// #     Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WebGraph {
    ids: Box<[NodeId]>,
    index: HashMap<NodeId, usize>,
    succ_offsets: Box<[usize]>,
    succ: Box<[usize]>,
    pred_offsets: Box<[usize]>,
    pred: Box<[usize]>,
    dangling: Box<[usize]>,
}

impl WebGraph {
    /// Builds a graph from a network, identifying pages (and the targets of
    /// links expressed as content) with the given identifier.
    ///
    /// Identification happens exactly once per page and per link.
    pub fn from_network(network: &Network, identify: &impl Identify) -> Result<Self, RankError> {
        Self::from_successors(network.pages().iter().map(|page| {
            (
                page.id(identify),
                page.links()
                    .iter()
                    .map(|link| link.resolve(identify))
                    .collect::<Vec<_>>(),
            )
        }))
    }

    /// Builds a graph from a sequence of identifiers, each paired with the
    /// identifiers of its successors.
    ///
    /// # Errors
    ///
    /// [`RankError::DuplicateNode`] if an identifier appears twice as a node,
    /// [`RankError::UnknownLink`] if a successor is not a node.
    pub fn from_successors<I, L>(nodes: I) -> Result<Self, RankError>
    where
        I: IntoIterator<Item = (NodeId, L)>,
        L: IntoIterator<Item = NodeId>,
    {
        let nodes = nodes
            .into_iter()
            .map(|(id, succ)| (id, succ.into_iter().collect::<Vec<_>>()))
            .collect::<Vec<_>>();
        let n = nodes.len();

        let mut index = HashMap::with_capacity(n);
        for (i, (id, _)) in nodes.iter().enumerate() {
            if index.insert(id.clone(), i).is_some() {
                return Err(RankError::DuplicateNode(id.clone()));
            }
        }

        let mut succ_offsets = Vec::with_capacity(n + 1);
        let mut succ = Vec::with_capacity(nodes.iter().map(|(_, s)| s.len()).sum());
        let mut indegrees = vec![0_usize; n];
        succ_offsets.push(0);
        for (id, targets) in &nodes {
            for target in targets {
                let &j = index
                    .get(target)
                    .ok_or_else(|| RankError::UnknownLink {
                        page: id.clone(),
                        target: target.clone(),
                    })?;
                succ.push(j);
                indegrees[j] += 1;
            }
            succ_offsets.push(succ.len());
        }

        // Invert every arc exactly once
        let mut pred_offsets = Vec::with_capacity(n + 1);
        pred_offsets.push(0);
        for d in &indegrees {
            pred_offsets.push(pred_offsets[pred_offsets.len() - 1] + d);
        }
        let mut cursor = pred_offsets[..n].to_vec();
        let mut pred = vec![0; succ.len()];
        for i in 0..n {
            for &j in &succ[succ_offsets[i]..succ_offsets[i + 1]] {
                pred[cursor[j]] = i;
                cursor[j] += 1;
            }
        }

        let dangling = (0..n)
            .filter(|&i| succ_offsets[i] == succ_offsets[i + 1])
            .collect::<Vec<_>>();

        log::debug!(
            "Built a graph with {} nodes, {} arcs and {} dangling nodes",
            n,
            succ.len(),
            dangling.len()
        );

        Ok(Self {
            ids: nodes.into_iter().map(|(id, _)| id).collect(),
            index,
            succ_offsets: succ_offsets.into(),
            succ: succ.into(),
            pred_offsets: pred_offsets.into(),
            pred: pred.into(),
            dangling: dangling.into(),
        })
    }

    pub fn num_nodes(&self) -> usize {
        self.ids.len()
    }

    pub fn num_arcs(&self) -> usize {
        self.succ.len()
    }

    /// Returns the identifier of the node with the given index.
    pub fn id(&self, node: usize) -> &NodeId {
        &self.ids[node]
    }

    /// Returns the identifiers of all nodes, in index order.
    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    /// Returns the index of the node with the given identifier.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn outdegree(&self, node: usize) -> usize {
        self.succ_offsets[node + 1] - self.succ_offsets[node]
    }

    pub fn successors(&self, node: usize) -> &[usize] {
        &self.succ[self.succ_offsets[node]..self.succ_offsets[node + 1]]
    }

    pub fn predecessors(&self, node: usize) -> &[usize] {
        &self.pred[self.pred_offsets[node]..self.pred_offsets[node + 1]]
    }

    /// Returns the indices of dangling nodes, in increasing order.
    pub fn dangling(&self) -> &[usize] {
        &self.dangling
    }

    pub fn is_dangling(&self, node: usize) -> bool {
        self.outdegree(node) == 0
    }
}
