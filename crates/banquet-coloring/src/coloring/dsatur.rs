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

//! DSatur coloring.
//!
//! The saturation of an uncolored vertex is the number of its neighbors that
//! are already colored (one per colored neighbor, even when two of them share
//! a color). The vertex of highest degree is seeded with color 0; afterwards
//! the most saturated uncolored vertex is colored next with the sequential
//! rule. Ties go to the vertex that comes first in construction order.

use crate::{
    coloring::{Coloring, colorizer::Colorizer, palette::Palette},
    graph::conflict::ConflictGraph,
    index::{Color, VertexIndex},
    monitor::coloring_monitor::ColoringMonitor,
};

#[derive(Clone, Debug, Default)]
pub struct DSaturColorizer {
    saturation: Vec<usize>,
}

impl DSaturColorizer {
    #[inline]
    pub fn new() -> Self {
        Self {
            saturation: Vec::new(),
        }
    }

    fn saturate_neighbors(&mut self, graph: &ConflictGraph, palette: &Palette, vertex: VertexIndex) {
        for n in graph.vertex(vertex).neighbors() {
            if !palette.is_colored(*n) {
                self.saturation[n.get()] += 1;
            }
        }
    }

    fn most_saturated(&self, palette: &Palette) -> Option<VertexIndex> {
        let mut best: Option<(VertexIndex, usize)> = None;
        for (i, &saturation) in self.saturation.iter().enumerate() {
            let vertex = VertexIndex::new(i);
            if palette.is_colored(vertex) {
                continue;
            }
            match best {
                Some((_, best_saturation)) if saturation <= best_saturation => {}
                _ => best = Some((vertex, saturation)),
            }
        }
        best.map(|(vertex, _)| vertex)
    }
}

/// The first vertex of maximum degree.
fn highest_degree(graph: &ConflictGraph) -> Option<VertexIndex> {
    let mut best: Option<(VertexIndex, usize)> = None;
    for vertex in graph.vertices() {
        match best {
            Some((_, degree)) if vertex.degree() <= degree => {}
            _ => best = Some((vertex.index(), vertex.degree())),
        }
    }
    best.map(|(vertex, _)| vertex)
}

impl Colorizer for DSaturColorizer {
    fn name(&self) -> &str {
        "DSatur"
    }

    fn colorize(
        &mut self,
        graph: &ConflictGraph,
        capacity: usize,
        monitor: &mut dyn ColoringMonitor,
    ) -> Coloring {
        let mut palette = Palette::new(graph.num_vertices());
        self.saturation.clear();
        self.saturation.resize(graph.num_vertices(), 0);

        let Some(seed) = highest_degree(graph) else {
            return palette.into_coloring();
        };
        palette.count_probe();
        palette.assign(graph, seed, Color::new(0), monitor);
        self.saturate_neighbors(graph, &palette, seed);

        while let Some(vertex) = self.most_saturated(&palette) {
            let color = palette.smallest_admissible(graph, vertex, capacity);
            palette.assign(graph, vertex, color, monitor);
            self.saturate_neighbors(graph, &palette, vertex);
        }

        palette.into_coloring()
    }
}
