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

//! Seating run orchestration.
//!
//! `SeatingEngine::run` drives one strategy against one venue:
//!
//! `Idle → GraphBuilt → FeasibilityChecked → Coloring → Colored → Applied`
//!
//! or `Idle → GraphBuilt → Failed` when a friend group does not fit at a
//! table. Every transition is reported to the monitor. The failure path
//! returns before anything is written to the venue.

use crate::{
    apply::AssignmentApplier,
    coloring::colorizer::Colorizer,
    error::SeatingError,
    feasibility::check_feasibility,
    graph::conflict::ConflictGraph,
    monitor::coloring_monitor::ColoringMonitor,
    result::SeatingOutcome,
    stats::ColoringStatistics,
};
use banquet_model::venue::Venue;
use std::time::Instant;

/// The phases of a seating run.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum RunPhase {
    #[default]
    Idle,
    GraphBuilt,
    FeasibilityChecked,
    Failed,
    Coloring,
    Colored,
    Applied,
}

impl RunPhase {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, RunPhase::Failed | RunPhase::Applied)
    }

    /// Returns `true` if a run may move from `self` to `next`.
    pub fn can_advance_to(self, next: RunPhase) -> bool {
        use RunPhase::*;
        matches!(
            (self, next),
            (Idle, GraphBuilt)
                | (GraphBuilt, FeasibilityChecked)
                | (GraphBuilt, Failed)
                | (FeasibilityChecked, Coloring)
                | (Coloring, Colored)
                | (Colored, Applied)
        )
    }
}

impl std::fmt::Display for RunPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunPhase::Idle => write!(f, "Idle"),
            RunPhase::GraphBuilt => write!(f, "GraphBuilt"),
            RunPhase::FeasibilityChecked => write!(f, "FeasibilityChecked"),
            RunPhase::Failed => write!(f, "Failed"),
            RunPhase::Coloring => write!(f, "Coloring"),
            RunPhase::Colored => write!(f, "Colored"),
            RunPhase::Applied => write!(f, "Applied"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SeatingEngine {
    phase: RunPhase,
}

impl SeatingEngine {
    #[inline]
    pub fn new() -> Self {
        Self {
            phase: RunPhase::Idle,
        }
    }

    /// The phase the last run reached.
    #[inline]
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    #[inline]
    fn advance(&mut self, next: RunPhase, monitor: &mut dyn ColoringMonitor) {
        debug_assert!(
            self.phase.can_advance_to(next),
            "illegal run phase transition {} -> {}",
            self.phase,
            next
        );
        self.phase = next;
        monitor.on_phase(next);
    }

    /// Seats every client of `venue` with `colorizer`.
    pub fn run<V, C>(
        &mut self,
        venue: &mut V,
        colorizer: &mut C,
        monitor: &mut dyn ColoringMonitor,
    ) -> Result<SeatingOutcome, SeatingError>
    where
        V: Venue + ?Sized,
        C: Colorizer + ?Sized,
    {
        let start = Instant::now();
        self.phase = RunPhase::Idle;
        let strategy = colorizer.name().to_owned();
        let capacity = venue.table_capacity();
        let mut stats = ColoringStatistics::default();

        let graph = ConflictGraph::build(&*venue);
        stats.on_graph_built(graph.num_vertices(), graph.num_edges());
        monitor.on_enter_run(&strategy, &graph.summary(capacity));
        self.advance(RunPhase::GraphBuilt, monitor);

        let feasible = check_feasibility(&graph, capacity);
        stats.set_graph_time(start.elapsed());
        if let Err(err) = feasible {
            self.advance(RunPhase::Failed, monitor);
            stats.set_total_time(start.elapsed());
            monitor.on_exit_run(&stats);
            return Err(err.into());
        }
        self.advance(RunPhase::FeasibilityChecked, monitor);

        self.advance(RunPhase::Coloring, monitor);
        let coloring_start = Instant::now();
        let coloring = colorizer.colorize(&graph, capacity, monitor);
        stats.set_coloring_time(coloring_start.elapsed());
        stats.on_colors_probed(coloring.probes());
        stats.on_colored(coloring.num_colors());
        debug_assert!(
            coloring.is_proper(&graph),
            "{} produced an improper coloring",
            strategy
        );
        self.advance(RunPhase::Colored, monitor);

        let apply_start = Instant::now();
        let applied = AssignmentApplier::apply(&graph, &coloring, venue);
        stats.set_apply_time(apply_start.elapsed());
        stats.on_applied(applied.tables_created, applied.clients_seated);
        self.advance(RunPhase::Applied, monitor);

        let elapsed = start.elapsed();
        stats.set_total_time(elapsed);
        monitor.on_exit_run(&stats);

        Ok(SeatingOutcome::new(
            strategy,
            elapsed,
            applied.tables_created,
            coloring,
            stats,
        ))
    }
}
