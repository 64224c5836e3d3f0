/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::RandomAccessGraph;

/// Successor lists indexed by node.
///
/// Arcs are never deduplicated or sorted: multiple arcs and self-loops are
/// kept exactly as they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArcLists {
    succ: Box<[Vec<usize>]>,
    num_arcs: usize,
}

impl ArcLists {
    /// Creates successor lists for `num_nodes` nodes and no arcs.
    pub fn empty(num_nodes: usize) -> Self {
        Self {
            succ: vec![Vec::new(); num_nodes].into_boxed_slice(),
            num_arcs: 0,
        }
    }

    /// Creates successor lists for `num_nodes` nodes from a list of arcs.
    ///
    /// # Panics
    ///
    /// If an arc has an endpoint greater than or equal to `num_nodes`.
    pub fn from_arcs(num_nodes: usize, arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut lists = Self::empty(num_nodes);
        for (src, dst) in arcs {
            lists.add_arc(src, dst);
        }
        lists
    }

    /// Appends `dst` to the successors of `src`.
    ///
    /// # Panics
    ///
    /// If either endpoint is not a node of the graph.
    pub fn add_arc(&mut self, src: usize, dst: usize) {
        assert!(
            dst < self.succ.len(),
            "Node {dst} out of range (number of nodes: {})",
            self.succ.len()
        );
        self.succ[src].push(dst);
        self.num_arcs += 1;
    }

    /// Returns the transpose of these lists.
    ///
    /// Predecessors of a node appear in increasing order of source, and for
    /// the same source in the order in which the arcs were added.
    pub fn transpose(&self) -> Self {
        let mut transpose = Self::empty(self.succ.len());
        for (src, succ) in self.succ.iter().enumerate() {
            for &dst in succ {
                transpose.add_arc(dst, src);
            }
        }
        transpose
    }
}

impl RandomAccessGraph for ArcLists {
    type Successors<'a> = std::iter::Copied<std::slice::Iter<'a, usize>>;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.succ[node].iter().copied()
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }
}

/// A graph together with its transpose.
///
/// For every arc (_u_, _v_), _v_ is among the successors of _u_ in
/// [`forward`](GraphStore::forward) and _u_ is among the successors of _v_ in
/// [`backward`](GraphStore::backward), with the same multiplicity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphStore {
    forward: ArcLists,
    backward: ArcLists,
}

impl GraphStore {
    /// Builds a graph with `num_nodes` nodes from a list of arcs.
    ///
    /// # Panics
    ///
    /// If an arc has an endpoint greater than or equal to `num_nodes`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_algo::prelude::*;
    ///
    /// let graph = GraphStore::from_arcs(3, [(0, 1), (1, 2), (1, 2), (2, 2)]);
    /// assert_eq!(graph.num_nodes(), 3);
    /// assert_eq!(graph.num_arcs(), 4);
    /// assert_eq!(graph.forward().successors(1).collect::<Vec<_>>(), vec![2, 2]);
    /// assert_eq!(graph.backward().successors(2).collect::<Vec<_>>(), vec![1, 1, 2]);
    /// ```
    pub fn from_arcs(num_nodes: usize, arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut forward = ArcLists::empty(num_nodes);
        let mut backward = ArcLists::empty(num_nodes);
        for (src, dst) in arcs {
            forward.add_arc(src, dst);
            backward.add_arc(dst, src);
        }
        Self { forward, backward }
    }

    /// Builds a graph from its successor lists, computing the transpose.
    pub fn from_forward(forward: ArcLists) -> Self {
        let backward = forward.transpose();
        Self { forward, backward }
    }

    pub fn num_nodes(&self) -> usize {
        self.forward.num_nodes()
    }

    pub fn num_arcs(&self) -> usize {
        self.forward.num_arcs()
    }

    /// The successor lists of the graph.
    pub fn forward(&self) -> &ArcLists {
        &self.forward
    }

    /// The successor lists of the transpose of the graph.
    pub fn backward(&self) -> &ArcLists {
        &self.backward
    }
}
