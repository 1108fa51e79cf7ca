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

//! Colorings and the strategies that produce them.
//!
//! A `Coloring` maps every vertex of a conflict graph to a `Color` and keeps
//! the summed occupancy of each color. Strategies implement
//! `colorizer::Colorizer`; `strategy::Strategy` selects one by name.
//!
//! - `sequential`: vertices in construction order.
//! - `largest_degree`: vertices by descending degree.
//! - `welsh_powell`: one color at a time over the degree order.
//! - `dsatur`: most saturated vertex first.

pub mod colorizer;
pub mod dsatur;
pub mod largest_degree;
pub(crate) mod palette;
pub mod sequential;
pub mod strategy;
pub mod welsh_powell;

use crate::{
    graph::conflict::ConflictGraph,
    index::{Color, VertexIndex},
};

/// A total assignment of colors to the vertices of a conflict graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coloring {
    colors: Vec<Color>, // len = num_vertices
    loads: Vec<usize>,  // len = num_colors
    probes: u64,
}

impl Coloring {
    #[inline]
    pub(crate) fn from_parts(colors: Vec<Color>, loads: Vec<usize>, probes: u64) -> Self {
        debug_assert!(
            colors.iter().all(|c| c.get() < loads.len()),
            "color without load entry"
        );
        Self {
            colors,
            loads,
            probes,
        }
    }

    /// The coloring of the empty graph.
    #[inline]
    pub fn empty() -> Self {
        Self {
            colors: Vec::new(),
            loads: Vec::new(),
            probes: 0,
        }
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.colors.len()
    }

    /// Highest color in use plus one; 0 for the empty graph.
    #[inline]
    pub fn num_colors(&self) -> usize {
        self.loads.len()
    }

    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[inline]
    pub fn color_of(&self, vertex: VertexIndex) -> Color {
        let i = vertex.get();
        assert!(
            i < self.colors.len(),
            "called `Coloring::color_of` with vertex index out of bounds: the len is {} but the index is {}",
            self.colors.len(),
            i
        );
        self.colors[i]
    }

    /// The summed occupancy of the vertices holding `color`.
    #[inline]
    pub fn load_of(&self, color: Color) -> usize {
        self.loads.get(color.get()).copied().unwrap_or(0)
    }

    /// The vertices holding `color`, in ascending order.
    pub fn vertices_with(&self, color: Color) -> impl Iterator<Item = VertexIndex> + '_ {
        self.colors
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == color)
            .map(|(i, _)| VertexIndex::new(i))
    }

    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    pub fn loads(&self) -> &[usize] {
        &self.loads
    }

    /// Candidate colors tested while building this coloring.
    #[inline]
    pub fn probes(&self) -> u64 {
        self.probes
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (VertexIndex, Color)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(i, c)| (VertexIndex::new(i), *c))
    }

    /// Returns `true` if the coloring covers `graph` and no edge joins two
    /// vertices of the same color.
    pub fn is_proper(&self, graph: &ConflictGraph) -> bool {
        self.colors.len() == graph.num_vertices()
            && graph.vertices().iter().all(|vertex| {
                let own = self.colors[vertex.index().get()];
                vertex
                    .neighbors()
                    .iter()
                    .all(|n| self.colors[n.get()] != own)
            })
    }
}

impl std::fmt::Display for Coloring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Coloring ({} colors)", self.num_colors())?;
        for (color, load) in self.loads.iter().enumerate() {
            let members = self
                .vertices_with(Color::new(color))
                .map(|v| v.get().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "   {:<4} load {:<4} [{}]", color, load, members)?;
        }
        Ok(())
    }
}
