/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{Context, Result};
use dsi_progress_logger::prelude::*;
use scc_algo::prelude::*;
use std::io::{BufWriter, Write};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

// Usage: scc-algo <0|1> [SEED] < ARCS
// 0 selects Kosaraju's algorithm, 1 selects DCSC.
fn main() -> Result<()> {
    let start = Instant::now();
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let Some(selector) = std::env::args().nth(1) else {
        writeln!(out, "Invalid arguments.")?;
        out.flush()?;
        return Ok(());
    };
    let seed = match std::env::args().nth(2) {
        Some(seed) => seed
            .parse::<u64>()
            .with_context(|| format!("Invalid seed {seed:?}"))?,
        None => time_seed(),
    };

    let mut main_pl = progress_logger![display_memory = true];
    let LabeledGraph { graph, labels } =
        read_labeled_graph(std::io::stdin().lock(), &mut main_pl)?;

    writeln!(out, "Strongly connected components (size: <nodes>):")?;
    let input_time = start.elapsed();

    let algo_start = Instant::now();
    let report = match Algorithm::from_selector(&selector) {
        Ok(algorithm) => {
            main_pl.info(format_args!("Running {algorithm:?} (seed {seed})"));
            let mut printer = LabelPrinter::new(&labels, &mut out);
            algorithm.run(&graph, seed, &mut printer, &mut main_pl)?
        }
        Err(err) => {
            log::warn!("{err}; no components will be computed");
            SccReport::default()
        }
    };
    let algo_time = algo_start.elapsed();

    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "Number of nodes:      {}", graph.num_nodes())?;
    writeln!(out, "Number of edges:      {}", graph.num_arcs())?;
    writeln!(out, "Number of SCCs:       {}", report.scc_count)?;
    writeln!(out, "Size of largest SCC:  {}", report.largest_scc_size)?;
    writeln!(out, "Running time (input): {} ms", input_time.as_millis())?;
    writeln!(out, "Running time (algo):  {} ms", algo_time.as_millis())?;
    out.flush()?;

    Ok(())
}

/// Derives a seed for DCSC from the wall clock.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
