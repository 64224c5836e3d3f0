/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Compressed graph representation.
//!
//! Nodes are dense indices in `0..num_nodes`, assigned by a
//! [`VertexCompressor`] in the order in which labels are first seen. A
//! [`GraphStore`] keeps the successor lists of the graph together with those
//! of its transpose, so that algorithms can follow arcs in both directions.

mod arc_lists;
pub use arc_lists::*;

mod labels;
pub use labels::*;

mod builder;
pub use builder::*;

mod read;
pub use read::*;

/// A graph providing random access to the successors of its nodes.
///
/// Successors are enumerated in the order in which the corresponding arcs
/// were added, and an arc added several times is enumerated several times.
pub trait RandomAccessGraph {
    /// The type of the iterator over the successors of a node.
    type Successors<'a>: IntoIterator<Item = usize>
    where
        Self: 'a;

    /// Returns the number of nodes of the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs of the graph, duplicates included.
    fn num_arcs(&self) -> usize;

    /// Returns the successors of `node`.
    fn successors(&self, node: usize) -> Self::Successors<'_>;

    /// Returns the number of successors of `node`.
    fn outdegree(&self, node: usize) -> usize;
}
