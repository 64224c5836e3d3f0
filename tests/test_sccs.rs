/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scc_algo::prelude::*;
use std::collections::HashMap;

/// A graph with `num_nodes` nodes and `num_arcs` random arcs.
fn random_graph(num_nodes: usize, num_arcs: usize, seed: u64) -> GraphStore {
    let mut rng = StdRng::seed_from_u64(seed);
    GraphStore::from_arcs(
        num_nodes,
        (0..num_arcs).map(|_| {
            (
                rng.random_range(0..num_nodes),
                rng.random_range(0..num_nodes),
            )
        }),
    )
}

/// Reachability by brute force: `reach[u][v]` is true if `v` is reachable
/// from `u`.
fn transitive_closure(graph: &GraphStore) -> Vec<Vec<bool>> {
    let n = graph.num_nodes();
    (0..n)
        .map(|root| {
            let mut reached = vec![false; n];
            let mut queue = vec![root];
            reached[root] = true;
            while let Some(node) = queue.pop() {
                for succ in graph.forward().successors(node) {
                    if !reached[succ] {
                        reached[succ] = true;
                        queue.push(succ);
                    }
                }
            }
            reached
        })
        .collect()
}

/// Maps each node to the smallest node of its component, so that
/// assignments can be compared independently of component numbering.
fn canonical(sccs: &Sccs) -> Vec<usize> {
    let mut min_node = HashMap::new();
    for (node, &component) in sccs.components().iter().enumerate() {
        min_node.entry(component).or_insert(node);
    }
    sccs.components()
        .iter()
        .map(|component| min_node[component])
        .collect()
}

fn sorted_sizes(sccs: &Sccs) -> Vec<usize> {
    let mut sizes = sccs.compute_sizes().into_vec();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes
}

macro_rules! test_scc_algo {
    ($finder:expr, $name:ident) => {
        mod $name {
            use super::*;

            fn compute(graph: &GraphStore) -> Result<(Sccs, SccReport)> {
                let mut sccs = Sccs::new(graph.num_nodes());
                let report = $finder.find(graph, &mut sccs, no_logging![])?;
                assert_eq!(report.scc_count, sccs.num_components());
                Ok((sccs, report))
            }

            #[test]
            fn test_buckets() -> Result<()> {
                let arcs = [
                    (0, 0),
                    (1, 0),
                    (1, 2),
                    (2, 1),
                    (2, 3),
                    (2, 4),
                    (2, 5),
                    (3, 4),
                    (4, 3),
                    (5, 5),
                    (5, 6),
                    (5, 7),
                    (5, 8),
                    (6, 7),
                    (8, 7),
                ];
                let graph = GraphStore::from_arcs(9, arcs);

                let (mut components, report) = compute(&graph)?;

                assert_eq!(components.components()[3], components.components()[4]);
                assert_eq!(components.components()[1], components.components()[2]);

                components.sort_by_size();
                let sizes = components.compute_sizes();
                assert_eq!(sizes, vec![2, 2, 1, 1, 1, 1, 1].into_boxed_slice());
                assert_eq!(report.scc_count, 7);
                assert_eq!(report.largest_scc_size, 2);

                Ok(())
            }

            #[test]
            fn test_buckets_2() -> Result<()> {
                let graph = GraphStore::from_arcs(4, [(0, 1), (1, 2), (2, 0), (1, 3)]);
                let (components, report) = compute(&graph)?;
                assert_eq!(sorted_sizes(&components), vec![3, 1]);
                assert_eq!(report.largest_scc_size, 3);
                Ok(())
            }

            #[test]
            fn test_cycle() -> Result<()> {
                let graph = GraphStore::from_arcs(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
                let (components, report) = compute(&graph)?;
                assert_eq!(sorted_sizes(&components), vec![4]);
                assert_eq!(
                    report,
                    SccReport {
                        scc_count: 1,
                        largest_scc_size: 4
                    }
                );
                Ok(())
            }

            #[test]
            fn test_chain() -> Result<()> {
                let graph = GraphStore::from_arcs(3, [(0, 1), (1, 2)]);
                let (components, report) = compute(&graph)?;
                assert_eq!(sorted_sizes(&components), vec![1, 1, 1]);
                assert_eq!(
                    report,
                    SccReport {
                        scc_count: 3,
                        largest_scc_size: 1
                    }
                );
                Ok(())
            }

            #[test]
            fn test_no_arcs() -> Result<()> {
                let (_, report) = compute(&GraphStore::from_arcs(1, []))?;
                assert_eq!(report.scc_count, 1);
                assert_eq!(report.largest_scc_size, 1);

                let (components, report) = compute(&GraphStore::from_arcs(10, []))?;
                assert_eq!(report.scc_count, 10);
                assert_eq!(sorted_sizes(&components), vec![1; 10]);
                Ok(())
            }

            #[test]
            fn test_empty() -> Result<()> {
                let (components, report) = compute(&GraphStore::default())?;
                assert_eq!(components.num_components(), 0);
                assert_eq!(report, SccReport::default());
                Ok(())
            }

            #[test]
            fn test_self_loop() -> Result<()> {
                let (_, report) = compute(&GraphStore::from_arcs(1, [(0, 0)]))?;
                assert_eq!(
                    report,
                    SccReport {
                        scc_count: 1,
                        largest_scc_size: 1
                    }
                );
                Ok(())
            }

            #[test]
            fn test_duplicate_arcs() -> Result<()> {
                let graph = GraphStore::from_arcs(3, [(0, 1), (0, 1), (1, 0), (1, 0), (2, 2)]);
                let (components, report) = compute(&graph)?;
                assert_eq!(sorted_sizes(&components), vec![2, 1]);
                assert_eq!(report.scc_count, 2);
                Ok(())
            }

            #[test]
            fn test_complete_graph() -> Result<()> {
                let n = 20;
                let graph = GraphStore::from_arcs(
                    n,
                    (0..n).flat_map(|u| (0..n).filter(move |&v| v != u).map(move |v| (u, v))),
                );
                let (components, report) = compute(&graph)?;
                assert_eq!(sorted_sizes(&components), vec![n]);
                assert_eq!(report.largest_scc_size, n);
                Ok(())
            }

            #[test]
            fn test_long_path() -> Result<()> {
                let n = 50_000;
                let graph = GraphStore::from_arcs(n, (1..n).map(|node| (node - 1, node)));
                let (_, report) = compute(&graph)?;
                assert_eq!(report.scc_count, n);
                assert_eq!(report.largest_scc_size, 1);

                let graph = GraphStore::from_arcs(n, (0..n).map(|node| (node, (node + 1) % n)));
                let (_, report) = compute(&graph)?;
                assert_eq!(report.scc_count, 1);
                assert_eq!(report.largest_scc_size, n);
                Ok(())
            }

            #[test]
            fn test_mutual_reachability() -> Result<()> {
                for seed in 0..20 {
                    let graph = random_graph(40, 60, seed);
                    let reach = transitive_closure(&graph);
                    let (components, _) = compute(&graph)?;
                    let components = components.components();
                    for u in 0..graph.num_nodes() {
                        for v in 0..graph.num_nodes() {
                            assert_eq!(
                                components[u] == components[v],
                                reach[u][v] && reach[v][u],
                                "nodes {u} and {v} with seed {seed}"
                            );
                        }
                    }
                }
                Ok(())
            }

            #[test]
            fn test_partition() -> Result<()> {
                for seed in 0..10 {
                    let graph = random_graph(1000, 1500, seed);
                    let mut listing: Vec<Vec<usize>> = vec![];
                    let report = $finder.find(&graph, &mut listing, no_logging![])?;
                    assert_eq!(listing.len(), report.scc_count);
                    assert_eq!(
                        listing.iter().map(Vec::len).max().unwrap_or(1).max(1),
                        report.largest_scc_size
                    );
                    let mut seen = vec![false; graph.num_nodes()];
                    for component in &listing {
                        assert!(!component.is_empty());
                        for &node in component {
                            assert!(!seen[node], "node {node} listed twice");
                            seen[node] = true;
                        }
                    }
                    assert!(seen.into_iter().all(|listed| listed));
                }
                Ok(())
            }
        }
    };
}

test_scc_algo!(Kosaraju, kosaraju);
test_scc_algo!(Dcsc::with_seed(0), dcsc);

#[test]
fn test_parity() -> Result<()> {
    for seed in 0..20 {
        let graph = random_graph(500, 550 + 25 * seed as usize, seed);

        let mut kosaraju = Sccs::new(graph.num_nodes());
        let kosaraju_report = Kosaraju.find(&graph, &mut kosaraju, no_logging![])?;

        for dcsc_seed in 0..3 {
            let mut dcsc = Sccs::new(graph.num_nodes());
            let dcsc_report =
                Dcsc::with_seed(dcsc_seed).find(&graph, &mut dcsc, no_logging![])?;
            assert_eq!(kosaraju_report, dcsc_report);
            assert_eq!(sorted_sizes(&kosaraju), sorted_sizes(&dcsc));
            assert_eq!(canonical(&kosaraju), canonical(&dcsc));
        }
    }
    Ok(())
}

#[test]
fn test_dcsc_is_reproducible() -> Result<()> {
    let graph = random_graph(300, 400, 7);
    let mut first: Vec<Vec<usize>> = vec![];
    let mut second: Vec<Vec<usize>> = vec![];
    Dcsc::with_seed(42).find(&graph, &mut first, no_logging![])?;
    Dcsc::with_seed(42).find(&graph, &mut second, no_logging![])?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_algorithm_run() -> Result<()> {
    let graph = random_graph(200, 260, 3);
    let mut kosaraju = Sccs::new(graph.num_nodes());
    let mut dcsc = Sccs::new(graph.num_nodes());
    let kosaraju_report = Algorithm::Kosaraju.run(&graph, 0, &mut kosaraju, no_logging![])?;
    let dcsc_report = Algorithm::Dcsc.run(&graph, 1, &mut dcsc, no_logging![])?;
    assert_eq!(kosaraju_report, dcsc_report);
    assert_eq!(canonical(&kosaraju), canonical(&dcsc));
    Ok(())
}

#[test]
fn test_labels_round_trip() -> Result<()> {
    let input = "a b\nb c\nc a\nc d\nd e\ne d\nf f\ng";
    let LabeledGraph { graph, labels } = read_labeled_graph(input.as_bytes(), no_logging![])?;
    assert_eq!(graph.num_nodes(), 6);
    assert_eq!(graph.num_arcs(), 7);

    for algorithm in [Algorithm::Kosaraju, Algorithm::Dcsc] {
        let mut printer = LabelPrinter::new(&labels, Vec::new());
        let report = algorithm.run(&graph, 5, &mut printer, no_logging![])?;
        assert_eq!(report.scc_count, 3);
        assert_eq!(report.largest_scc_size, 3);

        let output = String::from_utf8(printer.into_inner())?;
        let mut listed = vec![];
        for line in output.lines() {
            let (size, members) = line.split_once(": ").expect("missing size");
            let members: Vec<&str> = members.split_whitespace().collect();
            assert_eq!(size.parse::<usize>()?, members.len());
            listed.extend(members);
        }
        listed.sort_unstable();
        assert_eq!(listed, vec!["a", "b", "c", "d", "e", "f"]);
        assert!(listed.iter().all(|label| labels.index_of(label).is_some()));
    }
    Ok(())
}

#[test]
fn test_kosaraju_output() -> Result<()> {
    let input = "a b\nb a\nb c\n";
    let LabeledGraph { graph, labels } = read_labeled_graph(input.as_bytes(), no_logging![])?;
    let mut printer = LabelPrinter::new(&labels, Vec::new());
    Kosaraju.find(&graph, &mut printer, no_logging![])?;
    assert_eq!(String::from_utf8(printer.into_inner())?, "2: a b \n1: c \n");
    Ok(())
}
