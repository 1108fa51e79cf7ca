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

//! Welsh–Powell coloring.
//!
//! Vertices are sorted by descending degree once. Colors are then handed out
//! in waves: wave `c` scans the sorted list and gives `c` to every uncolored
//! vertex that has no neighbor colored `c` and whose occupancy still fits
//! strictly below the capacity (`load + occupancy < capacity`).
//!
//! Under the strict test a group that exactly fills a table never fits. A
//! wave that admits nothing therefore seats the first uncolored vertex of the
//! sorted list alone at its color, which keeps the heuristic total.

use crate::{
    coloring::{
        Coloring, colorizer::Colorizer, largest_degree::largest_degree_first, palette::Palette,
    },
    graph::conflict::ConflictGraph,
    index::{Color, VertexIndex},
    monitor::coloring_monitor::ColoringMonitor,
};

#[derive(Clone, Debug, Default)]
pub struct WelshPowellColorizer {
    order: Vec<VertexIndex>,
}

impl WelshPowellColorizer {
    #[inline]
    pub fn new() -> Self {
        Self { order: Vec::new() }
    }
}

impl Colorizer for WelshPowellColorizer {
    fn name(&self) -> &str {
        "Welsh Powell"
    }

    fn colorize(
        &mut self,
        graph: &ConflictGraph,
        capacity: usize,
        monitor: &mut dyn ColoringMonitor,
    ) -> Coloring {
        largest_degree_first(graph, &mut self.order);

        let mut palette = Palette::new(graph.num_vertices());
        let mut next_color = 0;
        while !palette.is_complete() {
            let color = Color::new(next_color);
            let mut admitted = false;

            for &vertex in &self.order {
                if palette.is_colored(vertex) {
                    continue;
                }
                palette.count_probe();
                if palette.has_neighbor_with(graph, vertex, color) {
                    continue;
                }
                let occupancy = graph.vertex(vertex).occupancy();
                if palette.load(color) + occupancy < capacity {
                    palette.assign(graph, vertex, color, monitor);
                    admitted = true;
                }
            }

            if !admitted {
                // The color is still empty here, so nobody blocks it.
                if let Some(&vertex) = self.order.iter().find(|v| !palette.is_colored(**v)) {
                    tracing::debug!(
                        vertex = vertex.get(),
                        color = next_color,
                        occupancy = graph.vertex(vertex).occupancy(),
                        capacity,
                        "no vertex fits strictly below capacity, opening a color for one group"
                    );
                    palette.assign(graph, vertex, color, monitor);
                }
            }

            next_color += 1;
        }

        palette.into_coloring()
    }
}
