/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{ComponentSink, SccFinder, SccReport};
use crate::graph::{GraphStore, RandomAccessGraph};
use crate::visits::depth_first::{FilterArgs, Seq};
use crate::visits::Sequential;
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::ControlFlow::Continue;
use sux::bits::BitVec;

/// Computes the strongly connected components of a graph using the
/// divide-and-conquer algorithm DCSC.
///
/// The algorithm works on a subset of the nodes, initially all nodes. It
/// picks a random pivot in the subset and computes the nodes of the subset
/// reachable from the pivot (its descendants) and the nodes of the subset
/// reaching the pivot (its predecessors), using visits confined to the
/// subset. Nodes that are both descendants and predecessors form the
/// component of the pivot; the remaining nodes are split into descendants
/// only, predecessors only, and the rest, and each part is processed in
/// turn. No component can straddle two parts.
///
/// If no node of a subset has successors, every node of the subset is a
/// component by itself. Note that the check looks at all successors, not
/// only those inside the subset: a subset whose nodes have only arcs leaving
/// the subset is split by visits, which yields the same components.
///
/// Subsets are kept on an explicit stack, so the depth of the
/// decomposition is limited only by the available memory. Components are
/// discovered in the same order as in the recursive formulation: the
/// component of the pivot, then those of the descendants, then those of the
/// predecessors, then the others.
///
/// The pivot is chosen using the random number generator provided at
/// construction time: the discovery order depends on the generator, but
/// the components do not.
///
/// # Examples
///
/// ```
/// use scc_algo::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let graph = GraphStore::from_arcs(5, [(0, 1), (1, 2), (2, 0), (1, 3), (3, 4), (4, 3)]);
/// let mut sccs = Sccs::new(graph.num_nodes());
/// let report = Dcsc::with_seed(0).find(&graph, &mut sccs, no_logging![]).unwrap();
///
/// assert_eq!(report.scc_count, 2);
/// assert_eq!(report.largest_scc_size, 3);
/// sccs.sort_by_size();
/// assert_eq!(sccs.compute_sizes(), vec![3, 2].into_boxed_slice());
/// ```
#[derive(Debug, Clone)]
pub struct Dcsc<R> {
    rng: R,
}

impl<R: Rng> Dcsc<R> {
    /// Creates a new instance choosing pivots with `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Dcsc<StdRng> {
    /// Creates a new instance choosing pivots with a [`StdRng`] seeded with
    /// `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SccFinder for Dcsc<R> {
    fn find<S: ComponentSink>(
        &mut self,
        graph: &GraphStore,
        sink: &mut S,
        pl: &mut impl ProgressLog,
    ) -> Result<SccReport, S::Error> {
        let num_nodes = graph.num_nodes();
        pl.item_name("node");
        pl.expected_updates(Some(num_nodes));
        pl.start("Computing strongly connected components...");

        let mut report = SccReport::default();
        let mut desc_visit = Seq::new(graph.forward());
        let mut pred_visit = Seq::new(graph.backward());
        // Members of the subset being split
        let mut in_subset = BitVec::new(num_nodes);
        // The last subset is processed first
        let mut subsets: Vec<Vec<usize>> = vec![(0..num_nodes).collect()];

        while let Some(subset) = subsets.pop() {
            if subset.is_empty() {
                continue;
            }

            if subset
                .iter()
                .all(|&node| graph.forward().outdegree(node) == 0)
            {
                for &node in &subset {
                    sink.singleton(node)?;
                }
                report.record_singletons(subset.len());
                pl.update_with_count(subset.len());
                continue;
            }

            let pivot = subset[self.rng.random_range(0..subset.len())];

            for &node in &subset {
                in_subset.set(node, true);
            }
            desc_visit.reset();
            pred_visit.reset();
            let in_subset_filter = |FilterArgs { node, .. }| in_subset.get(node);
            desc_visit
                .visit_filtered([pivot], |_| Continue(()), in_subset_filter)
                .continue_value_no_break();
            pred_visit
                .visit_filtered([pivot], |_| Continue(()), in_subset_filter)
                .continue_value_no_break();

            let mut scc = vec![];
            let mut desc = vec![];
            let mut pred = vec![];
            let mut rem = vec![];
            for &node in &subset {
                match (desc_visit.known(node), pred_visit.known(node)) {
                    (true, true) => scc.push(node),
                    (true, false) => desc.push(node),
                    (false, true) => pred.push(node),
                    (false, false) => rem.push(node),
                }
                in_subset.set(node, false);
            }

            report.record(scc.len());
            sink.component(&scc)?;
            pl.update_with_count(scc.len());

            subsets.push(rem);
            subsets.push(pred);
            subsets.push(desc);
        }

        pl.done();
        Ok(report)
    }
}
