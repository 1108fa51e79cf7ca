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

//! Seating run monitoring interface
//!
//! Declares the `ColoringMonitor` trait. A monitor observes a run without
//! influencing it: it learns the shape of the conflict graph, every phase
//! transition, every vertex as it is colored and the final statistics.
//!
//! Lifecycle
//! - enter → phase (graph built, feasibility checked) → vertex colored* →
//!   phase (colored, applied) → exit
//! - On an infeasible venue the phases stop at `Failed`; `on_exit_run` is
//!   still called.
//!
//! Methods take `&mut self`; monitors are assumed single-threaded. Keep
//! `on_vertex_colored` cheap, it runs once per vertex.

use crate::{
    engine::RunPhase,
    graph::conflict::GraphSummary,
    index::{Color, VertexIndex},
    stats::ColoringStatistics,
};

pub trait ColoringMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called once the conflict graph is built.
    fn on_enter_run(&mut self, strategy: &str, summary: &GraphSummary);
    /// Called on every phase transition.
    fn on_phase(&mut self, _phase: RunPhase) {}
    /// Called each time a strategy commits a color to a vertex.
    fn on_vertex_colored(&mut self, _vertex: VertexIndex, _color: Color) {}
    /// Called when the run ends, successfully or not.
    fn on_exit_run(&mut self, statistics: &ColoringStatistics);
}

impl std::fmt::Debug for dyn ColoringMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ColoringMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn ColoringMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ColoringMonitor({})", self.name())
    }
}
