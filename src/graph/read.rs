/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{GraphBuilder, LabeledGraph};
use dsi_progress_logger::ProgressLog;
use std::io::BufRead;
use thiserror::Error;

/// Errors that can happen while reading a list of labeled arcs.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Could not read the arc list")]
    Io(#[from] std::io::Error),
}

/// Returns whether `byte` separates tokens: space, horizontal tab, line
/// feed, vertical tab, form feed, or carriage return.
#[inline(always)]
fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Reads a graph given as a list of labeled arcs.
///
/// The input is a stream of tokens separated by ASCII whitespace, consumed
/// two at a time as source and target label of an arc; line breaks are just
/// whitespace. Tokens are arbitrary byte strings, so non-ASCII whitespace
/// and invalid UTF-8 are part of labels. If the number of tokens is odd, the
/// last one is ignored.
///
/// # Examples
///
/// ```
/// use scc_algo::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let input = "a b\nb c c\na dangling";
/// let LabeledGraph { graph, labels } =
///     read_labeled_graph(input.as_bytes(), no_logging![]).unwrap();
///
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.num_arcs(), 3);
/// assert_eq!(labels.index_of("dangling"), None);
/// ```
pub fn read_labeled_graph(
    mut reader: impl BufRead,
    pl: &mut impl ProgressLog,
) -> Result<LabeledGraph, ReadError> {
    pl.item_name("arc");
    pl.expected_updates(None);
    pl.start("Reading arcs...");

    let mut builder = GraphBuilder::new();
    let mut pending: Option<Vec<u8>> = None;
    let mut buffer = Vec::with_capacity(128);

    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        for token in buffer
            .split(|&byte| is_separator(byte))
            .filter(|token| !token.is_empty())
        {
            match pending.take() {
                None => pending = Some(token.to_vec()),
                Some(src) => {
                    builder.add_labeled_arc(src, token);
                    pl.light_update();
                }
            }
        }
    }

    if let Some(token) = pending {
        log::debug!(
            "Ignoring unpaired trailing token {:?}",
            String::from_utf8_lossy(&token)
        );
    }

    pl.done();
    Ok(builder.build())
}
