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

//! Bookkeeping shared by all strategies: the partial color assignment, the
//! occupancy load of every color and the forbidden-color scratch set.

use crate::{
    coloring::Coloring,
    graph::conflict::ConflictGraph,
    index::{Color, VertexIndex},
    monitor::coloring_monitor::ColoringMonitor,
};
use fixedbitset::FixedBitSet;

#[derive(Clone, Debug)]
pub(crate) struct Palette {
    colors: Vec<Option<Color>>, // len = num_vertices
    loads: Vec<usize>,          // len = highest color + 1
    forbidden: FixedBitSet,
    num_colored: usize,
    probes: u64,
}

impl Palette {
    pub(crate) fn new(num_vertices: usize) -> Self {
        Self {
            colors: vec![None; num_vertices],
            loads: Vec::new(),
            forbidden: FixedBitSet::new(),
            num_colored: 0,
            probes: 0,
        }
    }

    #[inline]
    pub(crate) fn is_colored(&self, vertex: VertexIndex) -> bool {
        self.colors[vertex.get()].is_some()
    }

    #[inline]
    pub(crate) fn is_complete(&self) -> bool {
        self.num_colored == self.colors.len()
    }

    #[inline]
    pub(crate) fn load(&self, color: Color) -> usize {
        self.loads.get(color.get()).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn count_probe(&mut self) {
        self.probes = self.probes.saturating_add(1);
    }

    pub(crate) fn has_neighbor_with(
        &self,
        graph: &ConflictGraph,
        vertex: VertexIndex,
        color: Color,
    ) -> bool {
        graph
            .vertex(vertex)
            .neighbors()
            .iter()
            .any(|n| self.colors[n.get()] == Some(color))
    }

    /// Smallest color not held by a colored neighbor whose load is still
    /// below `capacity`. The vertex's own occupancy is not part of the test.
    pub(crate) fn smallest_admissible(
        &mut self,
        graph: &ConflictGraph,
        vertex: VertexIndex,
        capacity: usize,
    ) -> Color {
        let num_colors = self.loads.len();
        self.forbidden.clear();
        self.forbidden.grow(num_colors);
        for n in graph.vertex(vertex).neighbors() {
            if let Some(color) = self.colors[n.get()] {
                self.forbidden.insert(color.get());
            }
        }

        for c in 0..num_colors {
            self.count_probe();
            if !self.forbidden.contains(c) && self.loads[c] < capacity {
                return Color::new(c);
            }
        }

        // A fresh color has no load and no neighbor holding it.
        self.count_probe();
        Color::new(num_colors)
    }

    pub(crate) fn assign(
        &mut self,
        graph: &ConflictGraph,
        vertex: VertexIndex,
        color: Color,
        monitor: &mut dyn ColoringMonitor,
    ) {
        let slot = &mut self.colors[vertex.get()];
        debug_assert!(slot.is_none(), "vertex {} colored twice", vertex.get());
        *slot = Some(color);

        let c = color.get();
        if c >= self.loads.len() {
            self.loads.resize(c + 1, 0);
        }
        self.loads[c] += graph.vertex(vertex).occupancy();
        self.num_colored += 1;

        monitor.on_vertex_colored(vertex, color);
    }

    /// Colors `order` one vertex at a time with `smallest_admissible`.
    pub(crate) fn color_in_order<I>(
        &mut self,
        graph: &ConflictGraph,
        capacity: usize,
        order: I,
        monitor: &mut dyn ColoringMonitor,
    ) where
        I: IntoIterator<Item = VertexIndex>,
    {
        for vertex in order {
            let color = self.smallest_admissible(graph, vertex, capacity);
            self.assign(graph, vertex, color, monitor);
        }
    }

    /// # Panics
    ///
    /// Panics if a vertex was left uncolored.
    pub(crate) fn into_coloring(self) -> Coloring {
        let colors = self
            .colors
            .into_iter()
            .enumerate()
            .map(|(i, color)| match color {
                Some(color) => color,
                None => panic!("called `Palette::into_coloring` with vertex {} uncolored", i),
            })
            .collect();
        Coloring::from_parts(colors, self.loads, self.probes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::no_op::NoOperationMonitor;
    use banquet_model::client::{Client, ClientId};

    fn id(i: u32) -> ClientId {
        ClientId::new(i)
    }

    fn v(i: usize) -> VertexIndex {
        VertexIndex::new(i)
    }

    #[test]
    fn test_full_color_is_skipped_but_boundary_is_open() {
        // {1,2,3} and {4}, no edges
        let graph = ConflictGraph::from_clients(&[
            Client::with_relations(id(1), [id(2), id(3)], []),
            Client::new(id(2)),
            Client::new(id(3)),
            Client::new(id(4)),
        ]);
        let mut monitor = NoOperationMonitor::new();

        // load 3 < capacity 4, so {4} joins color 0 and fills it
        let mut palette = Palette::new(graph.num_vertices());
        palette.color_in_order(&graph, 4, [v(0), v(1)], &mut monitor);
        let coloring = palette.into_coloring();
        assert_eq!(coloring.colors(), &[Color::new(0), Color::new(0)]);
        assert_eq!(coloring.load_of(Color::new(0)), 4);

        // load 3 >= capacity 3 rejects color 0
        let mut palette = Palette::new(graph.num_vertices());
        palette.color_in_order(&graph, 3, [v(0), v(1)], &mut monitor);
        let coloring = palette.into_coloring();
        assert_eq!(coloring.colors(), &[Color::new(0), Color::new(1)]);
    }

    #[test]
    fn test_neighbor_color_is_forbidden() {
        let graph = ConflictGraph::from_clients(&[
            Client::with_relations(id(1), [], [id(2)]),
            Client::new(id(2)),
        ]);
        let mut monitor = NoOperationMonitor::new();
        let mut palette = Palette::new(2);
        palette.assign(&graph, v(0), Color::new(0), &mut monitor);

        assert!(palette.has_neighbor_with(&graph, v(1), Color::new(0)));
        assert_eq!(
            palette.smallest_admissible(&graph, v(1), 10),
            Color::new(1)
        );
        assert!(!palette.is_complete());
    }

    #[test]
    fn test_probes_are_counted() {
        let graph = ConflictGraph::from_clients(&[Client::new(id(1))]);
        let mut palette = Palette::new(1);
        palette.color_in_order(&graph, 1, [v(0)], &mut NoOperationMonitor::new());
        assert!(palette.is_complete());
        assert_eq!(palette.into_coloring().probes(), 1);
    }

    #[test]
    #[should_panic(expected = "called `Palette::into_coloring` with vertex 0 uncolored")]
    fn test_incomplete_palette_panics() {
        Palette::new(1).into_coloring();
    }
}
