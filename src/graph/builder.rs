/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{GraphStore, VertexCompressor};

/// A graph whose nodes carry the string labels they were read with.
#[derive(Debug, Clone, Default)]
pub struct LabeledGraph {
    pub graph: GraphStore,
    pub labels: VertexCompressor,
}

/// Incremental construction of a [`LabeledGraph`] from labeled arcs.
///
/// Labels are compressed as they are seen; the successor lists are built
/// only by [`build`](GraphBuilder::build), once the number of nodes is known.
///
/// # Examples
///
/// ```
/// use scc_algo::prelude::*;
///
/// let mut builder = GraphBuilder::new();
/// builder.add_labeled_arc("a", "b");
/// builder.add_labeled_arc("b", "a");
/// builder.add_labeled_arc("b", "c");
/// let LabeledGraph { graph, labels } = builder.build();
///
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.num_arcs(), 3);
/// assert_eq!(labels.label(2), b"c");
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    labels: VertexCompressor,
    arcs: Vec<(usize, usize)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an arc from the node labeled `src` to the node labeled `dst`.
    pub fn add_labeled_arc(&mut self, src: impl AsRef<[u8]>, dst: impl AsRef<[u8]>) {
        let src = self.labels.compress(src);
        let dst = self.labels.compress(dst);
        self.arcs.push((src, dst));
    }

    pub fn build(self) -> LabeledGraph {
        LabeledGraph {
            graph: GraphStore::from_arcs(self.labels.len(), self.arcs),
            labels: self.labels,
        }
    }
}
