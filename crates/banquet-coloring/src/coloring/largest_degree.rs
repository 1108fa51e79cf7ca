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
    coloring::{Coloring, colorizer::Colorizer, palette::Palette},
    graph::conflict::ConflictGraph,
    index::VertexIndex,
    monitor::coloring_monitor::ColoringMonitor,
};
use std::cmp::Reverse;

/// Fills `order` with all vertices by descending degree. Ties keep
/// construction order.
pub(crate) fn largest_degree_first(graph: &ConflictGraph, order: &mut Vec<VertexIndex>) {
    order.clear();
    order.extend((0..graph.num_vertices()).map(VertexIndex::new));
    order.sort_by_key(|v| Reverse(graph.vertex(*v).degree()));
}

/// Largest Degree Ordering: the sequential rule applied to vertices sorted by
/// descending degree.
#[derive(Clone, Debug, Default)]
pub struct LargestDegreeColorizer {
    order: Vec<VertexIndex>,
}

impl LargestDegreeColorizer {
    #[inline]
    pub fn new() -> Self {
        Self { order: Vec::new() }
    }
}

impl Colorizer for LargestDegreeColorizer {
    fn name(&self) -> &str {
        "Largest Degree Ordering"
    }

    fn colorize(
        &mut self,
        graph: &ConflictGraph,
        capacity: usize,
        monitor: &mut dyn ColoringMonitor,
    ) -> Coloring {
        largest_degree_first(graph, &mut self.order);

        let mut palette = Palette::new(graph.num_vertices());
        palette.color_in_order(graph, capacity, self.order.iter().copied(), monitor);
        palette.into_coloring()
    }
}
