/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! Implementations must accept a callback function with argument [`Event`].
//! The callback is called at the [start of a visit](Event::Init), [every time
//! a new node is discovered](Event::Previsit), [every time a node is
//! revisited](Event::Revisit), [every time the enumeration of the successors
//! of a node is completed](Event::Postvisit), and [at the end of a
//! visit](Event::Done).
//!
//! Previsit events enumerate the nodes reachable from a root; postvisit
//! events enumerate them in finishing order.

mod seq;
pub use seq::*;

use crate::graph::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

use super::Sequential;

/// Types of callback events generated during a depth-first visit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Event {
    /// Initialization: the visit from `root` is about to start. This event
    /// should be used to set up state at the start of the visit.
    Init { root: usize },
    /// The node has been encountered for the first time: we are traversing a
    /// new tree arc, unless `node` is equal to `root`.
    Previsit {
        node: usize,
        root: usize,
        depth: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    Revisit {
        node: usize,
        root: usize,
        depth: usize,
    },
    /// The enumeration of the successors of the node has been completed.
    Postvisit {
        node: usize,
        root: usize,
        depth: usize,
    },
    /// The visit from `root` has been completed.
    Done { root: usize },
}

/// Filter arguments for depth-first visits.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct FilterArgs {
    /// The node about to be discovered.
    pub node: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The depth of `node` in the visit tree.
    pub depth: usize,
}

/// Returns the nodes of a graph in finishing order.
///
/// The nodes are roots of depth-first visits in increasing order, and they
/// are returned in the order in which the enumeration of their successors is
/// completed: the last node is the one that finished last.
///
/// # Examples
///
/// ```
/// use scc_algo::graph::ArcLists;
/// use scc_algo::visits::depth_first::finishing_order;
/// use dsi_progress_logger::no_logging;
///
/// let graph = ArcLists::from_arcs(4, [(0, 1), (1, 2), (1, 3), (3, 0)]);
/// assert_eq!(finishing_order(&graph, no_logging![]), vec![2, 3, 1, 0].into_boxed_slice());
/// ```
pub fn finishing_order(graph: &impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Box<[usize]> {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing finishing order...");

    let mut visit = Seq::new(graph);
    let mut order = Vec::with_capacity(num_nodes);

    visit
        .visit(0..num_nodes, |event| {
            if let Event::Postvisit { node, .. } = event {
                pl.light_update();
                order.push(node);
            }
            Continue(())
        })
        .continue_value_no_break();

    pl.done();
    order.into_boxed_slice()
}
