/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graph::VertexCompressor;
use std::convert::Infallible;
use std::io::Write;

/// A receiver of strongly connected components.
pub trait ComponentSink {
    type Error;

    /// Receives a component, given as a nonempty list of nodes.
    fn component(&mut self, nodes: &[usize]) -> Result<(), Self::Error>;

    /// Receives a component made of a single node that has been classified
    /// without a visit.
    ///
    /// The default implementation delegates to
    /// [`component`](ComponentSink::component).
    fn singleton(&mut self, node: usize) -> Result<(), Self::Error> {
        self.component(&[node])
    }
}

/// Writes components as lines of labels.
///
/// A component is written as its size, a colon, and the labels of its nodes,
/// written back byte for byte and each followed by a space: `3: a b c \n`. Singletons classified without a
/// visit are written without the trailing space: `1: a\n`.
pub struct LabelPrinter<'a, W: Write> {
    labels: &'a VertexCompressor,
    writer: W,
}

impl<'a, W: Write> LabelPrinter<'a, W> {
    pub fn new(labels: &'a VertexCompressor, writer: W) -> Self {
        Self { labels, writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ComponentSink for LabelPrinter<'_, W> {
    type Error = std::io::Error;

    fn component(&mut self, nodes: &[usize]) -> Result<(), Self::Error> {
        write!(self.writer, "{}: ", nodes.len())?;
        for &node in nodes {
            self.writer.write_all(self.labels.label(node))?;
            self.writer.write_all(b" ")?;
        }
        writeln!(self.writer)
    }

    fn singleton(&mut self, node: usize) -> Result<(), Self::Error> {
        self.writer.write_all(b"1: ")?;
        self.writer.write_all(self.labels.label(node))?;
        writeln!(self.writer)
    }
}

/// Collects components in discovery order.
impl ComponentSink for Vec<Vec<usize>> {
    type Error = Infallible;

    fn component(&mut self, nodes: &[usize]) -> Result<(), Self::Error> {
        self.push(nodes.to_vec());
        Ok(())
    }
}
