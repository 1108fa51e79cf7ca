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

use crate::{
    engine::RunPhase,
    graph::conflict::GraphSummary,
    index::{Color, VertexIndex},
    monitor::coloring_monitor::ColoringMonitor,
    stats::ColoringStatistics,
};
use std::time::Instant;

/// Emits the progress of a run as structured `tracing` events.
///
/// Run boundaries are logged at `INFO`, phase transitions at `DEBUG` and every
/// colored vertex at `TRACE`. No subscriber is installed here.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    strategy: String,
    start_time: Instant,
    vertices_colored: usize,
    last_phase: RunPhase,
}

impl LogMonitor {
    pub fn new() -> Self {
        Self {
            strategy: String::new(),
            start_time: Instant::now(),
            vertices_colored: 0,
            last_phase: RunPhase::Idle,
        }
    }

    /// The strategy of the current (or last) run.
    #[inline]
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    #[inline]
    pub fn vertices_colored(&self) -> usize {
        self.vertices_colored
    }

    #[inline]
    pub fn last_phase(&self) -> RunPhase {
        self.last_phase
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(strategy: {}, phase: {})",
            self.strategy, self.last_phase
        )
    }
}

impl ColoringMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_run(&mut self, strategy: &str, summary: &GraphSummary) {
        self.strategy.clear();
        self.strategy.push_str(strategy);
        self.start_time = Instant::now();
        self.vertices_colored = 0;
        self.last_phase = RunPhase::Idle;

        tracing::info!(
            strategy = %self.strategy,
            clients = summary.num_clients,
            vertices = summary.num_vertices,
            edges = summary.num_edges,
            max_degree = summary.max_degree,
            capacity = summary.table_capacity,
            "seating run started"
        );
    }

    fn on_phase(&mut self, phase: RunPhase) {
        self.last_phase = phase;
        tracing::debug!(
            strategy = %self.strategy,
            phase = %phase,
            elapsed = ?self.start_time.elapsed(),
            "phase reached"
        );
    }

    fn on_vertex_colored(&mut self, vertex: VertexIndex, color: Color) {
        self.vertices_colored += 1;
        tracing::trace!(vertex = vertex.get(), color = color.get(), "vertex colored");
    }

    fn on_exit_run(&mut self, statistics: &ColoringStatistics) {
        if self.last_phase == RunPhase::Failed {
            tracing::info!(
                strategy = %self.strategy,
                elapsed = ?statistics.time_total,
                "seating run failed"
            );
            return;
        }

        tracing::info!(
            strategy = %self.strategy,
            tables = statistics.tables_created,
            clients_seated = statistics.clients_seated,
            colors_probed = statistics.colors_probed,
            elapsed = ?statistics.time_total,
            "seating run finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_current_run() {
        let mut monitor = LogMonitor::new();
        let summary = GraphSummary {
            num_clients: 3,
            num_vertices: 2,
            num_edges: 1,
            max_degree: 1,
            max_occupancy: 2,
            table_capacity: 2,
        };

        monitor.on_enter_run("Welsh Powell", &summary);
        monitor.on_phase(RunPhase::GraphBuilt);
        monitor.on_vertex_colored(VertexIndex::new(0), Color::new(0));
        monitor.on_vertex_colored(VertexIndex::new(1), Color::new(1));
        monitor.on_phase(RunPhase::Applied);
        monitor.on_exit_run(&ColoringStatistics::default());

        assert_eq!(monitor.strategy(), "Welsh Powell");
        assert_eq!(monitor.vertices_colored(), 2);
        assert_eq!(monitor.last_phase(), RunPhase::Applied);
        assert_eq!(
            monitor.to_string(),
            "LogMonitor(strategy: Welsh Powell, phase: Applied)"
        );

        monitor.on_enter_run("DSatur", &summary);
        assert_eq!(monitor.vertices_colored(), 0);
        assert_eq!(monitor.last_phase(), RunPhase::Idle);
    }
}
