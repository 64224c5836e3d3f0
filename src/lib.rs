/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Strongly connected components of directed graphs given as lists of
//! labeled arcs.
//!
//! Graphs are read by [`read_labeled_graph`](graph::read_labeled_graph),
//! which compresses arbitrary string labels to dense node indices. Components
//! can then be computed by either [Kosaraju's algorithm](sccs::Kosaraju) or by
//! the randomized [divide-and-conquer algorithm](sccs::Dcsc); both implement
//! [`SccFinder`](sccs::SccFinder) and report components to a
//! [`ComponentSink`](sccs::ComponentSink) as they are discovered.

pub mod graph;
pub mod sccs;
pub mod visits;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use graph::RandomAccessGraph;
    pub use sccs::{ComponentSink, SccFinder};
    pub use visits::Sequential;
}

/// Use `use scc_algo::prelude::*;` to import common utilities, modules and
/// all traits.
pub mod prelude {
    use super::*;
    pub use graph::{read_labeled_graph, GraphBuilder, GraphStore, LabeledGraph, VertexCompressor};
    pub use sccs::{Algorithm, Dcsc, Kosaraju, LabelPrinter, SccReport, Sccs};
    pub use traits::*;
    pub use visits::depth_first;
}
