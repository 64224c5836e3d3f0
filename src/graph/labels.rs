/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::HashMap;

/// A bidirectional map between labels and dense node indices.
///
/// Labels are arbitrary byte strings: they need not be valid UTF-8.
/// Indices are assigned starting from zero in the order in which labels are
/// first [compressed](VertexCompressor::compress), so after compressing _n_
/// distinct labels the indices are exactly `0..n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexCompressor {
    index: HashMap<Box<[u8]>, usize>,
    labels: Vec<Box<[u8]>>,
}

impl VertexCompressor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `label`, assigning the next free index if the
    /// label has never been seen.
    pub fn compress(&mut self, label: impl AsRef<[u8]>) -> usize {
        let label = label.as_ref();
        if let Some(&node) = self.index.get(label) {
            return node;
        }
        let node = self.labels.len();
        self.index.insert(label.into(), node);
        self.labels.push(label.into());
        node
    }

    /// Returns the index of `label`, if it is known.
    pub fn index_of(&self, label: impl AsRef<[u8]>) -> Option<usize> {
        self.index.get(label.as_ref()).copied()
    }

    /// Returns the label of `node`.
    ///
    /// # Panics
    ///
    /// If `node` is not smaller than [`len`](VertexCompressor::len).
    pub fn label(&self, node: usize) -> &[u8] {
        &self.labels[node]
    }

    /// Returns the number of known labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns an iterator over the labels in index order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.labels.iter().map(AsRef::as_ref)
    }
}
