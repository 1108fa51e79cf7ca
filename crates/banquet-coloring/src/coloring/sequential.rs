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

/// Colors vertices in construction order, each with the smallest color that
/// no colored neighbor holds and whose load is still below capacity.
///
/// A color whose load is below capacity accepts the next vertex even if the
/// addition reaches or passes the capacity.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialColorizer;

impl SequentialColorizer {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl Colorizer for SequentialColorizer {
    fn name(&self) -> &str {
        "Sequential Coloring"
    }

    fn colorize(
        &mut self,
        graph: &ConflictGraph,
        capacity: usize,
        monitor: &mut dyn ColoringMonitor,
    ) -> Coloring {
        let mut palette = Palette::new(graph.num_vertices());
        palette.color_in_order(
            graph,
            capacity,
            (0..graph.num_vertices()).map(VertexIndex::new),
            monitor,
        );
        palette.into_coloring()
    }
}
