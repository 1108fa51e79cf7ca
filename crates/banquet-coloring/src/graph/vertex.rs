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

use crate::index::VertexIndex;
use banquet_model::client::ClientId;
use smallvec::SmallVec;

/// One transitive friend group.
///
/// `members` keeps the order in which clients were merged. `neighbors` is kept
/// sorted, never contains the vertex itself and never holds duplicates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vertex {
    index: VertexIndex,
    members: SmallVec<[ClientId; 4]>,
    neighbors: SmallVec<[VertexIndex; 8]>,
}

impl Vertex {
    #[inline]
    pub(crate) fn new(index: VertexIndex) -> Self {
        Self {
            index,
            members: SmallVec::new(),
            neighbors: SmallVec::new(),
        }
    }

    #[inline]
    pub fn index(&self) -> VertexIndex {
        self.index
    }

    /// The number of clients merged into this vertex.
    #[inline]
    pub fn occupancy(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn members(&self) -> &[ClientId] {
        &self.members
    }

    #[inline]
    pub fn neighbors(&self) -> &[VertexIndex] {
        &self.neighbors
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    #[inline]
    pub fn is_adjacent(&self, other: VertexIndex) -> bool {
        self.neighbors.binary_search(&other).is_ok()
    }

    #[inline]
    pub(crate) fn add_member(&mut self, client: ClientId) {
        self.members.push(client);
    }

    /// Returns `true` if the edge is new. Self loops are ignored.
    pub(crate) fn add_neighbor(&mut self, other: VertexIndex) -> bool {
        if other == self.index {
            return false;
        }
        match self.neighbors.binary_search(&other) {
            Ok(_) => false,
            Err(pos) => {
                self.neighbors.insert(pos, other);
                true
            }
        }
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vertex({}, members: [", self.index.get())?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", member)?;
        }
        write!(f, "], degree: {})", self.degree())
    }
}
