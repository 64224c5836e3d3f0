/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on graphs.
//!
//! Visits accept a callback that is invoked on every event of the visit. The
//! callback returns a [`ControlFlow`]: returning [`Break`](ControlFlow::Break)
//! stops the visit immediately, and the value is returned to the caller. If
//! the callback never breaks, use `ControlFlow<Infallible, ()>` and the
//! [`NoBreak`](no_break::NoBreak) trait to unwrap the result.

pub mod depth_first;

use std::ops::ControlFlow;

/// A sequential visit.
///
/// Implementations of this trait must provide the
/// [`visit_filtered`](Sequential::visit_filtered) method, which should
/// perform a visit of the graph starting from each of the given roots that
/// has not been reached yet.
pub trait Sequential<A> {
    /// The type of the argument of the filter.
    type FilterArgs;

    /// Visits the graph from the specified roots, considering only nodes
    /// accepted by the filter.
    ///
    /// A node rejected by the filter is not marked as known: it might be
    /// visited later from another root, or by another call.
    ///
    /// # Arguments
    ///
    /// * `roots`: the nodes to start the visit from.
    ///
    /// * `callback`: the callback function.
    ///
    /// * `filter`: the filter function.
    fn visit_filtered<
        R: IntoIterator<Item = usize>,
        E,
        C: FnMut(A) -> ControlFlow<E, ()>,
        F: FnMut(Self::FilterArgs) -> bool,
    >(
        &mut self,
        roots: R,
        callback: C,
        filter: F,
    ) -> ControlFlow<E, ()>;

    /// Visits the graph from the specified roots.
    ///
    /// See [`visit_filtered`](Sequential::visit_filtered) for more details.
    fn visit<R: IntoIterator<Item = usize>, E, C: FnMut(A) -> ControlFlow<E, ()>>(
        &mut self,
        roots: R,
        callback: C,
    ) -> ControlFlow<E, ()> {
        self.visit_filtered(roots, callback, |_| true)
    }

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
