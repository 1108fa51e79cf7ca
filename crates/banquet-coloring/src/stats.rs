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

use std::time::Duration;

/// Statistics collected during one seating run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColoringStatistics {
    /// Friend groups in the conflict graph.
    pub vertices: usize,
    /// Undirected hostile edges in the conflict graph.
    pub edges: usize,
    /// Candidate colors tested across all vertices.
    pub colors_probed: u64,
    /// Highest color used plus one.
    pub colors_used: usize,
    pub tables_created: usize,
    pub clients_seated: usize,
    /// Time spent building the conflict graph and checking feasibility.
    pub time_graph: Duration,
    pub time_coloring: Duration,
    pub time_apply: Duration,
    pub time_total: Duration,
}

impl ColoringStatistics {
    #[inline]
    pub fn on_graph_built(&mut self, vertices: usize, edges: usize) {
        self.vertices = vertices;
        self.edges = edges;
    }

    #[inline]
    pub fn on_colors_probed(&mut self, probes: u64) {
        self.colors_probed = self.colors_probed.saturating_add(probes);
    }

    #[inline]
    pub fn on_colored(&mut self, colors_used: usize) {
        self.colors_used = colors_used;
    }

    #[inline]
    pub fn on_applied(&mut self, tables_created: usize, clients_seated: usize) {
        self.tables_created = tables_created;
        self.clients_seated = clients_seated;
    }

    #[inline]
    pub fn set_graph_time(&mut self, duration: Duration) {
        self.time_graph = duration;
    }

    #[inline]
    pub fn set_coloring_time(&mut self, duration: Duration) {
        self.time_coloring = duration;
    }

    #[inline]
    pub fn set_apply_time(&mut self, duration: Duration) {
        self.time_apply = duration;
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for ColoringStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Seating Statistics:")?;
        writeln!(f, "  Vertices:             {}", self.vertices)?;
        writeln!(f, "  Edges:                {}", self.edges)?;
        writeln!(f, "  Colors probed:        {}", self.colors_probed)?;
        writeln!(f, "  Colors used:          {}", self.colors_used)?;
        writeln!(f, "  Tables created:       {}", self.tables_created)?;
        writeln!(f, "  Clients seated:       {}", self.clients_seated)?;
        writeln!(f, "  Graph time:           {:.2?}", self.time_graph)?;
        writeln!(f, "  Coloring time:        {:.2?}", self.time_coloring)?;
        writeln!(f, "  Apply time:           {:.2?}", self.time_apply)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = ColoringStatistics::default();
        stats.on_graph_built(5, 4);
        stats.on_colors_probed(7);
        stats.on_colors_probed(u64::MAX);
        stats.on_colored(3);
        stats.on_applied(3, 6);

        assert_eq!(stats.vertices, 5);
        assert_eq!(stats.edges, 4);
        assert_eq!(stats.colors_probed, u64::MAX);
        assert_eq!(stats.colors_used, 3);
        assert_eq!(stats.tables_created, 3);
        assert_eq!(stats.clients_seated, 6);
    }

    #[test]
    fn test_display_lists_every_counter() {
        let mut stats = ColoringStatistics::default();
        stats.on_applied(2, 9);
        stats.set_total_time(Duration::from_millis(3));
        let text = stats.to_string();
        assert!(text.starts_with("Seating Statistics:\n"));
        assert!(text.contains("  Tables created:       2\n"));
        assert!(text.contains("  Clients seated:       9\n"));
        assert!(text.contains("  Total time:           3.00ms\n"));
    }
}
