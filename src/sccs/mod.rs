/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Algorithms used to compute strongly connected components.
//!
//! Both [`Kosaraju`] and [`Dcsc`] implement [`SccFinder`]: they pass each
//! component to a [`ComponentSink`] as soon as it is discovered, and return
//! an [`SccReport`] with the number of components and the size of the
//! largest one. The two algorithms always find the same components, but they
//! discover them in different orders.

mod kosaraju;
pub use kosaraju::*;

mod dcsc;
pub use dcsc::*;

mod sink;
pub use sink::*;

use crate::graph::GraphStore;
use dsi_progress_logger::ProgressLog;
use std::convert::Infallible;
use std::str::FromStr;
use thiserror::Error;

/// Aggregate statistics on the components found by an [`SccFinder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SccReport {
    /// The number of components found.
    pub scc_count: usize,
    /// The size of the largest component found, or one if no component of
    /// size greater than one was found.
    pub largest_scc_size: usize,
}

impl Default for SccReport {
    fn default() -> Self {
        Self {
            scc_count: 0,
            largest_scc_size: 1,
        }
    }
}

impl SccReport {
    /// Records a component of the given size.
    pub fn record(&mut self, size: usize) {
        self.scc_count += 1;
        self.largest_scc_size = self.largest_scc_size.max(size);
    }

    /// Records `count` components of size one.
    pub fn record_singletons(&mut self, count: usize) {
        self.scc_count += count;
    }
}

/// An algorithm computing the strongly connected components of a graph.
pub trait SccFinder {
    /// Computes the strongly connected components of `graph`.
    ///
    /// Each component is passed to `sink` as soon as it is discovered; if the
    /// sink fails, the computation stops and the error is returned.
    ///
    /// # Arguments
    ///
    /// * `graph`: the graph, together with its transpose.
    ///
    /// * `sink`: the receiver of the components.
    ///
    /// * `pl`: a progress logger.
    fn find<S: ComponentSink>(
        &mut self,
        graph: &GraphStore,
        sink: &mut S,
        pl: &mut impl ProgressLog,
    ) -> Result<SccReport, S::Error>;
}

/// The available algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// [Kosaraju's algorithm](Kosaraju).
    Kosaraju,
    /// The [divide-and-conquer algorithm](Dcsc).
    Dcsc,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown algorithm selector {0:?} (use 0 for Kosaraju or 1 for DCSC)")]
pub struct UnknownAlgorithm(pub String);

impl Algorithm {
    /// Selects an algorithm using the first character of `selector`: `0`
    /// selects Kosaraju's algorithm, and `1` selects DCSC.
    pub fn from_selector(selector: &str) -> Result<Self, UnknownAlgorithm> {
        match selector.chars().next() {
            Some('0') => Ok(Algorithm::Kosaraju),
            Some('1') => Ok(Algorithm::Dcsc),
            _ => Err(UnknownAlgorithm(selector.to_owned())),
        }
    }

    /// Runs the algorithm; `seed` is used only by DCSC.
    pub fn run<S: ComponentSink>(
        self,
        graph: &GraphStore,
        seed: u64,
        sink: &mut S,
        pl: &mut impl ProgressLog,
    ) -> Result<SccReport, S::Error> {
        match self {
            Algorithm::Kosaraju => Kosaraju.find(graph, sink, pl),
            Algorithm::Dcsc => Dcsc::with_seed(seed).find(graph, sink, pl),
        }
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_selector(s)
    }
}

/// The component of each node.
///
/// Components are numbered in discovery order, but they can be
/// [renumbered by decreasing size](Sccs::sort_by_size).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sccs {
    num_components: usize,
    components: Box<[usize]>,
}

impl Sccs {
    /// Creates an empty assignment for a graph with `num_nodes` nodes.
    pub fn new(num_nodes: usize) -> Self {
        Sccs {
            num_components: 0,
            components: vec![usize::MAX; num_nodes].into_boxed_slice(),
        }
    }

    /// Returns the number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Returns a slice containing, for each node, the index of the component
    /// it belongs to.
    ///
    /// Nodes that have not been assigned a component yet have index
    /// `usize::MAX`.
    #[inline(always)]
    pub fn components(&self) -> &[usize] {
        &self.components
    }

    /// Returns the sizes of all components.
    ///
    /// Nodes that have not been assigned a component are not counted.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        let mut sizes = vec![0; self.num_components()];
        for &node_component in self.components.iter() {
            if node_component != usize::MAX {
                sizes[node_component] += 1;
            }
        }
        sizes.into_boxed_slice()
    }

    /// Renumbers by decreasing size the components of this set.
    ///
    /// After a call to this method, the sizes of strongly connected
    /// components are decreasing in the component index. Components of the
    /// same size keep their relative order. Nodes that have not been
    /// assigned a component keep index `usize::MAX`.
    pub fn sort_by_size(&mut self) {
        let sizes = self.compute_sizes();
        let mut sort_perm = Vec::from_iter(0..sizes.len());
        sort_perm.sort_by(|&x, &y| sizes[y].cmp(&sizes[x]));
        let mut inv_perm = vec![0; sizes.len()];
        for (rank, &component) in sort_perm.iter().enumerate() {
            inv_perm[component] = rank;
        }
        self.components
            .iter_mut()
            .filter(|node_component| **node_component != usize::MAX)
            .for_each(|node_component| *node_component = inv_perm[*node_component]);
    }
}

impl ComponentSink for Sccs {
    type Error = Infallible;

    fn component(&mut self, nodes: &[usize]) -> Result<(), Self::Error> {
        for &node in nodes {
            self.components[node] = self.num_components;
        }
        self.num_components += 1;
        Ok(())
    }
}
