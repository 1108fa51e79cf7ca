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

//! Index spaces owned by the coloring layer.

use banquet_model::index::{TableIndex, TypedIndex, TypedIndexTag};

/// A tag type for vertex indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct VertexIndexTag;

impl TypedIndexTag for VertexIndexTag {
    const NAME: &'static str = "VertexIndex";
}

/// The position of a vertex in `ConflictGraph::vertices`.
pub type VertexIndex = TypedIndex<VertexIndexTag>;

/// A tag type for colors.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ColorTag;

impl TypedIndexTag for ColorTag {
    const NAME: &'static str = "Color";
}

/// A color. Color `c` becomes table `c` once the coloring is applied.
pub type Color = TypedIndex<ColorTag>;

/// Maps a color to the table it is applied to.
#[inline(always)]
pub const fn table_of_color(color: Color) -> TableIndex {
    TableIndex::new(color.get())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_maps_to_same_table_index() {
        assert_eq!(table_of_color(Color::new(0)), TableIndex::new(0));
        assert_eq!(table_of_color(Color::new(7)), TableIndex::new(7));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(format!("{}", VertexIndex::new(3)), "VertexIndex(3)");
        assert_eq!(format!("{}", Color::new(1)), "Color(1)");
    }
}
