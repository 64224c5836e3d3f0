/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{Event, FilterArgs};
use crate::graph::RandomAccessGraph;
use crate::visits::Sequential;
use std::ops::ControlFlow::{self, Continue};
use sux::bits::BitVec;

/// Sequential depth-first visits.
///
/// This is an iterative implementation that does not need a large stack
/// size: the visit path is kept on the heap as a stack of pairs made of a node
/// and an iterator on its successors, so arbitrarily long paths can be
/// visited.
///
/// Known nodes are recorded using one bit per node. Successors are enumerated
/// in the order provided by the graph, so the sequence of events is the same
/// as that of the textbook recursive visit.
///
/// # Examples
///
/// Let's collect the nodes reachable from node 1, ignoring node 2:
///
/// ```
/// use scc_algo::graph::ArcLists;
/// use scc_algo::visits::{depth_first::*, Sequential};
/// use std::ops::ControlFlow::Continue;
/// use no_break::NoBreak;
///
/// let graph = ArcLists::from_arcs(5, [(0, 1), (1, 2), (2, 3), (1, 4), (4, 0)]);
/// let mut visit = Seq::new(&graph);
/// let mut reached = vec![];
///
/// visit
///     .visit_filtered(
///         [1],
///         |event| {
///             if let Event::Previsit { node, .. } = event {
///                 reached.push(node);
///             }
///             Continue(())
///         },
///         |FilterArgs { node, .. }| node != 2,
///     )
///     .continue_value_no_break();
///
/// assert_eq!(reached, vec![1, 4, 0]);
/// ```
pub struct Seq<'a, G: RandomAccessGraph> {
    graph: &'a G,
    /// The visit path: each entry is a node and the iterator on its
    /// successors that have not been enumerated yet.
    stack: Vec<(usize, <G::Successors<'a> as IntoIterator>::IntoIter)>,
    known: BitVec,
}

impl<'a, G: RandomAccessGraph> Seq<'a, G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    ///
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> Seq<'a, G> {
        Self {
            graph,
            stack: Vec::with_capacity(16),
            known: BitVec::new(graph.num_nodes()),
        }
    }

    /// Returns whether `node` has been discovered by a previous visit.
    pub fn known(&self, node: usize) -> bool {
        self.known.get(node)
    }
}

impl<'a, G: RandomAccessGraph> Sequential<Event> for Seq<'a, G> {
    type FilterArgs = FilterArgs;

    fn visit_filtered<
        R: IntoIterator<Item = usize>,
        E,
        C: FnMut(Event) -> ControlFlow<E, ()>,
        F: FnMut(Self::FilterArgs) -> bool,
    >(
        &mut self,
        roots: R,
        mut callback: C,
        mut filter: F,
    ) -> ControlFlow<E, ()> {
        for root in roots {
            if self.known.get(root)
                || !filter(FilterArgs {
                    node: root,
                    root,
                    depth: 0,
                })
            {
                // We ignore the node: it might be visited later
                continue;
            }

            callback(Event::Init { root })?;

            self.known.set(root, true);

            callback(Event::Previsit {
                node: root,
                root,
                depth: 0,
            })?;

            self.stack
                .push((root, self.graph.successors(root).into_iter()));

            'recurse: loop {
                let depth = self.stack.len();
                let Some((curr, iter)) = self.stack.last_mut() else {
                    break;
                };
                let curr = *curr;

                for succ in iter {
                    if self.known.get(succ) {
                        // Node has already been discovered
                        callback(Event::Revisit {
                            node: succ,
                            root,
                            depth,
                        })?;
                    } else if filter(FilterArgs {
                        node: succ,
                        root,
                        depth,
                    }) {
                        // First time seeing node
                        self.known.set(succ, true);

                        callback(Event::Previsit {
                            node: succ,
                            root,
                            depth,
                        })?;

                        self.stack
                            .push((succ, self.graph.successors(succ).into_iter()));

                        continue 'recurse;
                    } // Else we ignore the node: it might be visited later
                }

                callback(Event::Postvisit {
                    node: curr,
                    root,
                    depth: depth - 1,
                })?;

                self.stack.pop();
            }

            callback(Event::Done { root })?;
        }

        Continue(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.known.fill(false);
    }
}
