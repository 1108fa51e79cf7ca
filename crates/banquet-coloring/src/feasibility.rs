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

//! The occupancy check run before any coloring.
//!
//! Friends must share a table, so a friend group larger than the table
//! capacity can never be seated. The check stops at the first offending
//! vertex in construction order.

use crate::{error::InfeasibleSeatingError, graph::conflict::ConflictGraph};

/// Verifies that every vertex fits at a table of `capacity` seats.
pub fn check_feasibility(
    graph: &ConflictGraph,
    capacity: usize,
) -> Result<(), InfeasibleSeatingError> {
    match graph
        .vertices()
        .iter()
        .find(|vertex| vertex.occupancy() > capacity)
    {
        Some(vertex) => Err(InfeasibleSeatingError::new(
            vertex.index(),
            vertex.occupancy(),
            capacity,
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::VertexIndex;
    use banquet_model::client::{Client, ClientId};

    fn id(i: u32) -> ClientId {
        ClientId::new(i)
    }

    fn group_of_three_and_singleton() -> ConflictGraph {
        ConflictGraph::from_clients(&[
            Client::new(id(9)),
            Client::with_relations(id(1), [id(2), id(3)], []),
            Client::new(id(2)),
            Client::new(id(3)),
        ])
    }

    #[test]
    fn test_group_equal_to_capacity_is_feasible() {
        assert_eq!(check_feasibility(&group_of_three_and_singleton(), 3), Ok(()));
    }

    #[test]
    fn test_oversized_group_is_reported() {
        let err = check_feasibility(&group_of_three_and_singleton(), 2).unwrap_err();
        assert_eq!(err.vertex, VertexIndex::new(1));
        assert_eq!(err.occupancy, 3);
        assert_eq!(err.capacity, 2);
    }

    #[test]
    fn test_empty_graph_is_feasible() {
        assert_eq!(check_feasibility(&ConflictGraph::from_clients(&[]), 1), Ok(()));
    }
}
