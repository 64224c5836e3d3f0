/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{ComponentSink, SccFinder, SccReport};
use crate::graph::GraphStore;
use crate::visits::depth_first::{finishing_order, Event, Seq};
use crate::visits::Sequential;
use dsi_progress_logger::ProgressLog;
use std::ops::ControlFlow::{Break, Continue};

/// Computes the strongly connected components of a graph using Kosaraju's
/// algorithm.
///
/// A first depth-first visit of the graph computes the finishing order of
/// the nodes. Then, nodes are taken in reverse finishing order, and a visit
/// of the transpose from each node not yet reached yields a component.
///
/// Components are discovered in a deterministic order, and the nodes of each
/// component are listed in visit order.
///
/// # Examples
///
/// ```
/// use scc_algo::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let graph = GraphStore::from_arcs(4, [(0, 1), (1, 2), (2, 0), (1, 3)]);
/// let mut components: Vec<Vec<usize>> = vec![];
/// let report = Kosaraju.find(&graph, &mut components, no_logging![]).unwrap();
///
/// assert_eq!(components, vec![vec![0, 2, 1], vec![3]]);
/// assert_eq!(report.scc_count, 2);
/// assert_eq!(report.largest_scc_size, 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Kosaraju;

impl SccFinder for Kosaraju {
    fn find<S: ComponentSink>(
        &mut self,
        graph: &GraphStore,
        sink: &mut S,
        pl: &mut impl ProgressLog,
    ) -> Result<SccReport, S::Error> {
        let num_nodes = graph.num_nodes();
        let order = finishing_order(graph.forward(), pl);

        pl.item_name("node");
        pl.expected_updates(Some(num_nodes));
        pl.start("Computing strongly connected components...");

        let mut report = SccReport::default();
        let mut visit = Seq::new(graph.backward());
        let mut component = Vec::with_capacity(16);

        let result = visit.visit(order.iter().rev().copied(), |event| {
            match event {
                Event::Init { .. } => {
                    component.clear();
                }
                Event::Previsit { node, .. } => {
                    pl.light_update();
                    component.push(node);
                }
                Event::Done { .. } => {
                    report.record(component.len());
                    if let Err(err) = sink.component(&component) {
                        return Break(err);
                    }
                }
                _ => (),
            }
            Continue(())
        });

        if let Break(err) = result {
            return Err(err);
        }

        pl.done();
        Ok(report)
    }
}
