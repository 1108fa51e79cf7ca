// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Coloring strategy interface
//!
//! Every strategy is a greedy, non-backtracking heuristic: it receives a
//! feasible conflict graph (no vertex larger than `capacity`) and must return
//! a total, proper coloring. How close to the minimum number of colors it gets
//! is the strategy's business.
//!
//! `colorize` takes `&mut self` so strategies can keep scratch buffers
//! between runs.

use crate::{
    coloring::Coloring, graph::conflict::ConflictGraph,
    monitor::coloring_monitor::ColoringMonitor,
};

pub trait Colorizer {
    /// A human-readable name for the strategy.
    fn name(&self) -> &str;

    /// Colors every vertex of `graph`.
    ///
    /// `monitor` receives one `on_vertex_colored` event per vertex.
    fn colorize(
        &mut self,
        graph: &ConflictGraph,
        capacity: usize,
        monitor: &mut dyn ColoringMonitor,
    ) -> Coloring;
}

impl std::fmt::Debug for dyn Colorizer + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Colorizer({})", self.name())
    }
}

impl std::fmt::Display for dyn Colorizer + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Colorizer({})", self.name())
    }
}

impl<C> Colorizer for Box<C>
where
    C: Colorizer + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn colorize(
        &mut self,
        graph: &ConflictGraph,
        capacity: usize,
        monitor: &mut dyn ColoringMonitor,
    ) -> Coloring {
        (**self).colorize(graph, capacity, monitor)
    }
}
