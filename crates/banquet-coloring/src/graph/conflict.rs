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

//! Conflict graph construction.
//!
//! Every transitive friend group of the venue collapses into one `Vertex`
//! whose occupancy is the size of the group. Two vertices are adjacent iff a
//! client of one declares a client of the other an enemy (either side counts).
//!
//! Vertices appear in the order of the first client of each group, so building
//! twice from the same venue yields the same numbering, the same partition and
//! the same edges.

use crate::{
    error::SeatingError,
    graph::{disjoint_set::DisjointSet, vertex::Vertex},
    index::VertexIndex,
};
use banquet_model::{
    client::{Client, ClientId},
    index::ClientIndex,
    venue::Venue,
};
use rustc_hash::FxHashMap;

/// A compact description of a conflict graph, handed to monitors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphSummary {
    pub num_clients: usize,
    pub num_vertices: usize,
    pub num_edges: usize,
    pub max_degree: usize,
    pub max_occupancy: usize,
    pub table_capacity: usize,
}

impl std::fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GraphSummary(clients: {}, vertices: {}, edges: {}, max degree: {}, max occupancy: {}, capacity: {})",
            self.num_clients,
            self.num_vertices,
            self.num_edges,
            self.max_degree,
            self.max_occupancy,
            self.table_capacity
        )
    }
}

/// Friend groups as vertices, hostilities as edges.
#[derive(Clone, Debug)]
pub struct ConflictGraph {
    vertices: Vec<Vertex>,
    clients: Vec<ClientId>,         // len = num_clients, venue order
    client_vertex: Vec<VertexIndex>, // len = num_clients
    lookup: FxHashMap<ClientId, ClientIndex>,
    num_edges: usize,
}

impl ConflictGraph {
    /// Builds the graph from the clients of `venue`.
    #[inline]
    pub fn build<V>(venue: &V) -> Self
    where
        V: Venue + ?Sized,
    {
        Self::from_clients(venue.clients())
    }

    /// Builds the graph from a client list.
    ///
    /// Relations naming an identity that is not in `clients` are skipped.
    pub fn from_clients(clients: &[Client]) -> Self {
        let num_clients = clients.len();

        let mut lookup = FxHashMap::with_capacity_and_hasher(num_clients, Default::default());
        for (i, client) in clients.iter().enumerate() {
            if lookup.insert(client.id(), ClientIndex::new(i)).is_some() {
                tracing::warn!(
                    client = %client.id(),
                    "duplicate client identity, relations resolve to the last occurrence"
                );
            }
        }

        let resolve = |client: &Client, other: ClientId, relation: &'static str| {
            let index = lookup.get(&other).copied();
            if index.is_none() {
                tracing::warn!(
                    client = %client.id(),
                    other = %other,
                    relation,
                    "relation names a client outside the venue, skipping"
                );
            }
            index
        };

        // Friends
        let mut groups = DisjointSet::new(num_clients);
        for (i, client) in clients.iter().enumerate() {
            for &friend in client.friends() {
                if let Some(j) = resolve(client, friend, "friend") {
                    groups.union(i, j.get());
                }
            }
        }

        let mut root_vertex: Vec<Option<VertexIndex>> = vec![None; num_clients];
        let mut vertices: Vec<Vertex> = Vec::with_capacity(groups.num_sets());
        let mut client_vertex: Vec<VertexIndex> = Vec::with_capacity(num_clients);
        for (i, client) in clients.iter().enumerate() {
            let root = groups.find(i);
            let vertex = match root_vertex[root] {
                Some(vertex) => vertex,
                None => {
                    let vertex = VertexIndex::new(vertices.len());
                    vertices.push(Vertex::new(vertex));
                    root_vertex[root] = Some(vertex);
                    vertex
                }
            };
            vertices[vertex.get()].add_member(client.id());
            client_vertex.push(vertex);
        }

        debug_assert_eq!(vertices.len(), groups.num_sets());

        // Enemies
        let mut num_edges = 0;
        for (i, client) in clients.iter().enumerate() {
            let a = client_vertex[i];
            for &enemy in client.enemies() {
                let Some(j) = resolve(client, enemy, "enemy") else {
                    continue;
                };
                let b = client_vertex[j.get()];
                if vertices[a.get()].add_neighbor(b) {
                    let mirrored = vertices[b.get()].add_neighbor(a);
                    debug_assert!(mirrored, "adjacency lists out of sync");
                    num_edges += 1;
                }
            }
        }

        Self {
            vertices,
            clients: clients.iter().map(Client::id).collect(),
            client_vertex,
            lookup,
            num_edges,
        }
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The number of undirected edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    #[inline]
    pub fn num_clients(&self) -> usize {
        self.clients.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The distinct vertices, in construction order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn vertex(&self, index: VertexIndex) -> &Vertex {
        let i = index.get();
        assert!(
            i < self.vertices.len(),
            "called `ConflictGraph::vertex` with vertex index out of bounds: the len is {} but the index is {}",
            self.vertices.len(),
            i
        );
        &self.vertices[i]
    }

    /// The client identities the graph was built from, in venue order.
    #[inline]
    pub fn clients(&self) -> &[ClientId] {
        &self.clients
    }

    /// Returns the vertex the client was merged into.
    pub fn vertex_of_client(&self, client: ClientId) -> Result<VertexIndex, SeatingError> {
        self.lookup
            .get(&client)
            .map(|index| self.client_vertex[index.get()])
            .ok_or(SeatingError::UnknownClient(client))
    }

    /// Returns the vertex of the client at `index` in venue order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn vertex_of_index(&self, index: ClientIndex) -> VertexIndex {
        let i = index.get();
        assert!(
            i < self.client_vertex.len(),
            "called `ConflictGraph::vertex_of_index` with client index out of bounds: the len is {} but the index is {}",
            self.client_vertex.len(),
            i
        );
        self.client_vertex[i]
    }

    #[inline]
    pub fn are_adjacent(&self, a: VertexIndex, b: VertexIndex) -> bool {
        self.vertex(a).is_adjacent(b)
    }

    pub fn summary(&self, table_capacity: usize) -> GraphSummary {
        GraphSummary {
            num_clients: self.num_clients(),
            num_vertices: self.num_vertices(),
            num_edges: self.num_edges,
            max_degree: self.vertices.iter().map(Vertex::degree).max().unwrap_or(0),
            max_occupancy: self
                .vertices
                .iter()
                .map(Vertex::occupancy)
                .max()
                .unwrap_or(0),
            table_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use banquet_model::venue::HallBuilder;

    fn id(i: u32) -> ClientId {
        ClientId::new(i)
    }

    fn v(i: usize) -> VertexIndex {
        VertexIndex::new(i)
    }

    /// {1,2} friends, 3 hates 1, 4-5-6 mutual enemies.
    fn reference_clients() -> Vec<Client> {
        vec![
            Client::with_relations(id(1), [id(2)], []),
            Client::with_relations(id(2), [id(1)], []),
            Client::with_relations(id(3), [], [id(1)]),
            Client::with_relations(id(4), [], [id(5), id(6)]),
            Client::with_relations(id(5), [], [id(6)]),
            Client::new(id(6)),
        ]
    }

    #[test]
    fn test_reference_graph_structure() {
        let g = ConflictGraph::from_clients(&reference_clients());

        assert_eq!(g.num_clients(), 6);
        assert_eq!(g.num_vertices(), 5);
        assert_eq!(g.num_edges(), 4);

        assert_eq!(g.vertex(v(0)).members(), &[id(1), id(2)]);
        assert_eq!(g.vertex(v(0)).occupancy(), 2);
        assert_eq!(g.vertex(v(1)).members(), &[id(3)]);

        assert!(g.are_adjacent(v(0), v(1)));
        assert!(g.are_adjacent(v(1), v(0)));
        assert!(g.are_adjacent(v(2), v(3)));
        assert!(g.are_adjacent(v(2), v(4)));
        assert!(g.are_adjacent(v(3), v(4)));
        assert!(!g.are_adjacent(v(0), v(2)));

        assert_eq!(g.vertex_of_client(id(2)), Ok(v(0)));
        assert_eq!(g.vertex_of_client(id(6)), Ok(v(4)));
        assert_eq!(g.vertex_of_index(ClientIndex::new(3)), v(2));
    }

    #[test]
    fn test_one_sided_friendship_merges() {
        let clients = vec![
            Client::new(id(1)),
            Client::with_relations(id(2), [id(1)], []),
        ];
        let g = ConflictGraph::from_clients(&clients);
        assert_eq!(g.num_vertices(), 1);
        assert_eq!(g.vertex(v(0)).occupancy(), 2);
    }

    #[test]
    fn test_transitive_and_cyclic_friends() {
        let clients = vec![
            Client::with_relations(id(1), [id(2)], []),
            Client::new(id(9)),
            Client::with_relations(id(2), [id(3)], []),
            Client::with_relations(id(3), [id(1)], []),
        ];
        let g = ConflictGraph::from_clients(&clients);
        assert_eq!(g.num_vertices(), 2);
        assert_eq!(g.vertex(v(0)).members(), &[id(1), id(2), id(3)]);
        assert_eq!(g.vertex(v(1)).members(), &[id(9)]);
    }

    #[test]
    fn test_hostile_friends_create_no_self_loop() {
        let clients = vec![
            Client::with_relations(id(1), [id(2)], [id(3)]),
            Client::with_relations(id(2), [id(3)], []),
            Client::new(id(3)),
        ];
        let g = ConflictGraph::from_clients(&clients);
        assert_eq!(g.num_vertices(), 1);
        assert_eq!(g.num_edges(), 0);
        assert_eq!(g.vertex(v(0)).degree(), 0);
    }

    #[test]
    fn test_mutual_enmity_counts_one_edge() {
        let clients = vec![
            Client::with_relations(id(1), [], [id(2)]),
            Client::with_relations(id(2), [], [id(1)]),
        ];
        let g = ConflictGraph::from_clients(&clients);
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.vertex(v(0)).neighbors(), &[v(1)]);
        assert_eq!(g.vertex(v(1)).neighbors(), &[v(0)]);
    }

    #[test]
    fn test_unknown_relations_are_skipped() {
        let clients = vec![
            Client::with_relations(id(1), [id(40)], [id(41)]),
            Client::new(id(2)),
        ];
        let g = ConflictGraph::from_clients(&clients);
        assert_eq!(g.num_vertices(), 2);
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn test_unknown_client_lookup_fails() {
        let g = ConflictGraph::from_clients(&reference_clients());
        assert_eq!(
            g.vertex_of_client(id(77)),
            Err(SeatingError::UnknownClient(id(77)))
        );
    }

    #[test]
    fn test_rebuild_is_identical() {
        let mut b = HallBuilder::new(3);
        for client in reference_clients() {
            b.add_client_with(client);
        }
        let hall = b.build().unwrap();

        let first = ConflictGraph::build(&hall);
        let second = ConflictGraph::build(&hall);
        assert_eq!(first.vertices(), second.vertices());
        assert_eq!(first.num_edges(), second.num_edges());
        assert_eq!(first.clients(), second.clients());
    }

    #[test]
    fn test_summary() {
        let g = ConflictGraph::from_clients(&reference_clients());
        let s = g.summary(4);
        assert_eq!(s.num_clients, 6);
        assert_eq!(s.num_vertices, 5);
        assert_eq!(s.num_edges, 4);
        assert_eq!(s.max_degree, 2);
        assert_eq!(s.max_occupancy, 2);
        assert_eq!(s.table_capacity, 4);
    }

    #[test]
    fn test_empty_graph() {
        let g = ConflictGraph::from_clients(&[]);
        assert!(g.is_empty());
        assert_eq!(g.num_edges(), 0);
        assert_eq!(g.summary(2).max_degree, 0);
    }

    #[test]
    #[should_panic(expected = "called `ConflictGraph::vertex` with vertex index out of bounds")]
    fn test_vertex_out_of_bounds_panics() {
        let g = ConflictGraph::from_clients(&[Client::new(id(1))]);
        g.vertex(v(1));
    }
}
