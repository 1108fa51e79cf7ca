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

//! Writing a coloring back to the venue.
//!
//! Exactly `num_colors()` tables are appended, in ascending color order, and
//! every client is seated at the table whose index equals the color of its
//! vertex. Colors are not compacted, and tables already present on the venue
//! are not accounted for; run on a fresh or reset venue.

use crate::{
    coloring::Coloring,
    graph::conflict::ConflictGraph,
    index::table_of_color,
};
use banquet_model::{index::ClientIndex, venue::Venue};

/// What `AssignmentApplier::apply` did to the venue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AppliedAssignment {
    pub tables_created: usize,
    pub clients_seated: usize,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AssignmentApplier;

impl AssignmentApplier {
    /// Creates the tables and seats every client of `graph`.
    ///
    /// # Panics
    ///
    /// Panics if `coloring` was not built for `graph`, or if the venue rejects
    /// a seating.
    pub fn apply<V>(graph: &ConflictGraph, coloring: &Coloring, venue: &mut V) -> AppliedAssignment
    where
        V: Venue + ?Sized,
    {
        assert_eq!(
            coloring.num_vertices(),
            graph.num_vertices(),
            "called `AssignmentApplier::apply` with a coloring of {} vertices for a graph of {}",
            coloring.num_vertices(),
            graph.num_vertices()
        );

        let tables_created = coloring.num_colors();
        for _ in 0..tables_created {
            venue.add_table();
        }

        for (i, &client) in graph.clients().iter().enumerate() {
            let vertex = graph.vertex_of_index(ClientIndex::new(i));
            venue.seat_client(client, table_of_color(coloring.color_of(vertex)));
        }

        AppliedAssignment {
            tables_created,
            clients_seated: graph.num_clients(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        coloring::{colorizer::Colorizer, sequential::SequentialColorizer},
        monitor::no_op::NoOperationMonitor,
    };
    use banquet_model::{
        client::ClientId,
        index::TableIndex,
        venue::HallBuilder,
    };

    fn id(i: u32) -> ClientId {
        ClientId::new(i)
    }

    #[test]
    fn test_tables_follow_colors() {
        let mut b = HallBuilder::new(4);
        b.add_client(id(1)).add_client(id(2)).add_client(id(3));
        b.add_friends(id(1), id(3)).add_enemies(id(2), id(3));
        let mut hall = b.build().unwrap();

        let graph = ConflictGraph::build(&hall);
        let coloring = SequentialColorizer::new().colorize(&graph, 4, &mut NoOperationMonitor);
        let applied = AssignmentApplier::apply(&graph, &coloring, &mut hall);

        assert_eq!(
            applied,
            AppliedAssignment {
                tables_created: 2,
                clients_seated: 3
            }
        );
        assert_eq!(hall.num_tables(), 2);
        assert_eq!(hall.table_of(id(1)), Some(TableIndex::new(0)));
        assert_eq!(hall.table_of(id(3)), Some(TableIndex::new(0)));
        assert_eq!(hall.table_of(id(2)), Some(TableIndex::new(1)));
        assert!(hall.is_fully_seated());
    }

    #[test]
    fn test_empty_venue_creates_nothing() {
        let mut hall = HallBuilder::new(2).build().unwrap();
        let graph = ConflictGraph::build(&hall);
        let applied = AssignmentApplier::apply(&graph, &Coloring::empty(), &mut hall);
        assert_eq!(applied, AppliedAssignment::default());
        assert_eq!(hall.num_tables(), 0);
    }

    #[test]
    #[should_panic(expected = "called `AssignmentApplier::apply` with a coloring of 0 vertices")]
    fn test_mismatched_coloring_panics() {
        let mut b = HallBuilder::new(2);
        b.add_client(id(1));
        let mut hall = b.build().unwrap();
        let graph = ConflictGraph::build(&hall);
        AssignmentApplier::apply(&graph, &Coloring::empty(), &mut hall);
    }
}
