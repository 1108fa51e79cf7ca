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

//! Venues, tables and the in-memory `Hall`.
//!
//! `Venue` is the contract between the seating engine and whoever owns the
//! clients. The engine only enumerates clients, reads the table capacity,
//! appends tables and seats clients by identity. `Hall` is the in-memory
//! implementation used throughout the workspace; it is built through
//! `HallBuilder`, which rejects inconsistent input before a solver ever sees it.

use crate::{
    client::{Client, ClientId},
    index::{ClientIndex, TableIndex},
};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// The collaborator a seating run reads from and writes to.
pub trait Venue {
    /// The uniform number of seats per table. Always positive.
    fn table_capacity(&self) -> usize;

    /// All clients, in a fixed order.
    fn clients(&self) -> &[Client];

    /// The number of tables currently present.
    fn num_tables(&self) -> usize;

    /// Appends a new, empty table.
    fn add_table(&mut self);

    /// Seats `client` at the table with index `table`.
    ///
    /// # Panics
    ///
    /// Implementations panic if the client is unknown or the table does not exist.
    fn seat_client(&mut self, client: ClientId, table: TableIndex);
}

/// One table of a hall together with its guests in seating order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    index: TableIndex,
    guests: Vec<ClientId>,
}

impl Table {
    #[inline]
    fn new(index: TableIndex) -> Self {
        Self {
            index,
            guests: Vec::new(),
        }
    }

    #[inline]
    pub fn index(&self) -> TableIndex {
        self.index
    }

    #[inline]
    pub fn guests(&self) -> &[ClientId] {
        &self.guests
    }

    /// The number of clients seated at this table.
    #[inline]
    pub fn occupancy(&self) -> usize {
        self.guests.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Table {}:", self.index.get())?;
        for guest in &self.guests {
            write!(f, " {}", guest)?;
        }
        Ok(())
    }
}

/// Errors raised by `HallBuilder::build`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HallError {
    /// Tables must seat at least one person.
    #[error("table capacity must be a positive integer")]
    ZeroCapacity,
    /// Two clients share the same identity.
    #[error("client {0} is declared more than once")]
    DuplicateClient(ClientId),
    /// A friend or enemy list names a client that is not part of the hall.
    #[error("client {client} references unknown client {other}")]
    UnknownRelation { client: ClientId, other: ClientId },
}

/// An in-memory venue: clients, a uniform table capacity and the tables
/// created so far.
#[derive(Clone, Debug)]
pub struct Hall {
    table_capacity: usize,
    clients: Vec<Client>,
    positions: FxHashMap<ClientId, ClientIndex>,
    tables: Vec<Table>,
    seats: Vec<Option<TableIndex>>, // len = num_clients
}

impl Hall {
    #[inline]
    pub fn num_clients(&self) -> usize {
        self.clients.len()
    }

    #[inline]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Returns the position of `client` in `clients()`, if it belongs to this hall.
    #[inline]
    pub fn client_index(&self, client: ClientId) -> Option<ClientIndex> {
        self.positions.get(&client).copied()
    }

    /// Returns the client record for `client`, if it belongs to this hall.
    #[inline]
    pub fn client(&self, client: ClientId) -> Option<&Client> {
        self.client_index(client)
            .map(|index| &self.clients[index.get()])
    }

    /// Returns the table `client` is seated at, if any.
    #[inline]
    pub fn table_of(&self, client: ClientId) -> Option<TableIndex> {
        self.client_index(client)
            .and_then(|index| self.seats[index.get()])
    }

    /// Returns `true` if every client has a table.
    #[inline]
    pub fn is_fully_seated(&self) -> bool {
        self.seats.iter().all(Option::is_some)
    }

    /// Drops all tables and seatings, keeping clients and capacity.
    pub fn reset_tables(&mut self) {
        self.tables.clear();
        self.seats.iter_mut().for_each(|seat| *seat = None);
    }
}

impl Venue for Hall {
    #[inline]
    fn table_capacity(&self) -> usize {
        self.table_capacity
    }

    #[inline]
    fn clients(&self) -> &[Client] {
        &self.clients
    }

    #[inline]
    fn num_tables(&self) -> usize {
        self.tables.len()
    }

    #[inline]
    fn add_table(&mut self) {
        let index = TableIndex::new(self.tables.len());
        self.tables.push(Table::new(index));
    }

    fn seat_client(&mut self, client: ClientId, table: TableIndex) {
        let position = match self.positions.get(&client) {
            Some(position) => *position,
            None => panic!(
                "called `Hall::seat_client` with unknown client {}",
                client
            ),
        };
        assert!(
            table.get() < self.tables.len(),
            "called `Hall::seat_client` with table index out of bounds: the len is {} but the index is {}",
            self.tables.len(),
            table.get()
        );

        if let Some(previous) = self.seats[position.get()] {
            if previous == table {
                return;
            }
            self.tables[previous.get()].guests.retain(|guest| *guest != client);
        }

        self.tables[table.get()].guests.push(client);
        self.seats[position.get()] = Some(table);
    }
}

impl std::fmt::Display for Hall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Seating Plan")?;
        writeln!(f, "   Table Capacity: {}", self.table_capacity)?;
        writeln!(f, "   Clients:        {}", self.clients.len())?;
        writeln!(f)?;

        if self.tables.is_empty() {
            writeln!(f, "   (No tables created)")?;
            return Ok(());
        }

        writeln!(f, "   {:<8} | {:<9} | {}", "Table", "Occupancy", "Guests")?;
        writeln!(f, "   {:-<8}-+-{:-<9}-+-{:-<8}", "", "", "")?;
        for table in &self.tables {
            let guests = table
                .guests
                .iter()
                .map(|guest| guest.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(
                f,
                "   {:<8} | {:<9} | {}",
                table.index.get(),
                table.occupancy(),
                guests
            )?;
        }

        Ok(())
    }
}

/// Validated construction of a `Hall`.
///
/// Relations added with `add_friends` / `add_enemies` are stored on the first
/// client only, exactly as declared.
///
/// ```rust
/// use banquet_model::{client::ClientId, venue::{HallBuilder, Venue}};
///
/// let id = ClientId::new;
/// let mut builder = HallBuilder::new(4);
/// builder.add_client(id(1)).add_client(id(2)).add_client(id(3));
/// builder.add_friends(id(1), id(2)).add_enemies(id(3), id(1));
/// let hall = builder.build().unwrap();
/// assert_eq!(hall.clients().len(), 3);
/// assert_eq!(hall.table_capacity(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct HallBuilder {
    table_capacity: usize,
    clients: Vec<Client>,
    friendships: Vec<(ClientId, ClientId)>,
    enmities: Vec<(ClientId, ClientId)>,
}

impl HallBuilder {
    pub fn new(table_capacity: usize) -> Self {
        Self {
            table_capacity,
            clients: Vec::new(),
            friendships: Vec::new(),
            enmities: Vec::new(),
        }
    }

    #[inline]
    pub fn table_capacity(&self) -> usize {
        self.table_capacity
    }

    #[inline]
    pub fn num_clients(&self) -> usize {
        self.clients.len()
    }

    /// Adds a client without relationships.
    pub fn add_client(&mut self, id: ClientId) -> &mut Self {
        self.clients.push(Client::new(id));
        self
    }

    /// Adds a fully specified client record.
    pub fn add_client_with(&mut self, client: Client) -> &mut Self {
        self.clients.push(client);
        self
    }

    /// Records that `client` declares `other` a friend.
    pub fn add_friends(&mut self, client: ClientId, other: ClientId) -> &mut Self {
        self.friendships.push((client, other));
        self
    }

    /// Records that `client` declares `other` an enemy.
    pub fn add_enemies(&mut self, client: ClientId, other: ClientId) -> &mut Self {
        self.enmities.push((client, other));
        self
    }

    /// Validates the input and produces the hall.
    pub fn build(self) -> Result<Hall, HallError> {
        if self.table_capacity == 0 {
            return Err(HallError::ZeroCapacity);
        }

        let mut clients = self.clients;
        let mut positions =
            FxHashMap::with_capacity_and_hasher(clients.len(), Default::default());
        for (index, client) in clients.iter().enumerate() {
            if positions
                .insert(client.id(), ClientIndex::new(index))
                .is_some()
            {
                return Err(HallError::DuplicateClient(client.id()));
            }
        }

        let lookup = |client: ClientId, other: ClientId| -> Result<ClientIndex, HallError> {
            if !positions.contains_key(&other) {
                return Err(HallError::UnknownRelation { client, other });
            }
            positions
                .get(&client)
                .copied()
                .ok_or(HallError::UnknownRelation { client, other })
        };

        for &(client, other) in &self.friendships {
            let index = lookup(client, other)?;
            clients[index.get()].add_friend(other);
        }
        for &(client, other) in &self.enmities {
            let index = lookup(client, other)?;
            clients[index.get()].add_enemy(other);
        }

        for client in &clients {
            if let Some(other) = client
                .friends()
                .iter()
                .chain(client.enemies())
                .find(|other| !positions.contains_key(other))
            {
                return Err(HallError::UnknownRelation {
                    client: client.id(),
                    other: *other,
                });
            }
        }

        let num_clients = clients.len();
        Ok(Hall {
            table_capacity: self.table_capacity,
            clients,
            positions,
            tables: Vec::new(),
            seats: vec![None; num_clients],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(i: u32) -> ClientId {
        ClientId::new(i)
    }

    fn three_clients(capacity: usize) -> HallBuilder {
        let mut b = HallBuilder::new(capacity);
        b.add_client(id(1)).add_client(id(2)).add_client(id(3));
        b
    }

    #[test]
    fn test_build_keeps_client_order_and_capacity() {
        let hall = three_clients(5).build().unwrap();
        assert_eq!(hall.table_capacity(), 5);
        let ids: Vec<ClientId> = hall.clients().iter().map(Client::id).collect();
        assert_eq!(ids, vec![id(1), id(2), id(3)]);
        assert_eq!(hall.num_tables(), 0);
        assert_eq!(hall.client_index(id(3)), Some(ClientIndex::new(2)));
    }

    #[test]
    fn test_relations_are_stored_as_declared() {
        let mut b = three_clients(2);
        b.add_friends(id(1), id(2)).add_enemies(id(3), id(1));
        let hall = b.build().unwrap();

        assert_eq!(hall.client(id(1)).unwrap().friends(), &[id(2)]);
        assert!(hall.client(id(2)).unwrap().friends().is_empty());
        assert_eq!(hall.client(id(3)).unwrap().enemies(), &[id(1)]);
        assert!(hall.client(id(1)).unwrap().enemies().is_empty());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert_eq!(
            three_clients(0).build().unwrap_err(),
            HallError::ZeroCapacity
        );
    }

    #[test]
    fn test_duplicate_client_is_rejected() {
        let mut b = three_clients(2);
        b.add_client(id(2));
        assert_eq!(b.build().unwrap_err(), HallError::DuplicateClient(id(2)));
    }

    #[test]
    fn test_unknown_relation_is_rejected() {
        let mut b = three_clients(2);
        b.add_enemies(id(1), id(42));
        assert_eq!(
            b.build().unwrap_err(),
            HallError::UnknownRelation {
                client: id(1),
                other: id(42)
            }
        );

        let mut b = three_clients(2);
        b.add_client_with(Client::with_relations(id(4), [id(77)], []));
        assert_eq!(
            b.build().unwrap_err(),
            HallError::UnknownRelation {
                client: id(4),
                other: id(77)
            }
        );
    }

    #[test]
    fn test_relation_from_unknown_client_is_rejected() {
        let mut b = three_clients(2);
        b.add_friends(id(9), id(1));
        assert_eq!(
            b.build().unwrap_err(),
            HallError::UnknownRelation {
                client: id(9),
                other: id(1)
            }
        );
    }

    #[test]
    fn test_add_table_and_seat_client() {
        let mut hall = three_clients(2).build().unwrap();
        hall.add_table();
        hall.add_table();
        hall.seat_client(id(1), TableIndex::new(0));
        hall.seat_client(id(2), TableIndex::new(1));

        assert_eq!(hall.num_tables(), 2);
        assert_eq!(hall.table_of(id(1)), Some(TableIndex::new(0)));
        assert_eq!(hall.table_of(id(2)), Some(TableIndex::new(1)));
        assert_eq!(hall.table_of(id(3)), None);
        assert!(!hall.is_fully_seated());
        assert_eq!(hall.tables()[0].guests(), &[id(1)]);
        assert_eq!(hall.tables()[1].occupancy(), 1);
    }

    #[test]
    fn test_reseating_moves_the_client() {
        let mut hall = three_clients(2).build().unwrap();
        hall.add_table();
        hall.add_table();
        hall.seat_client(id(1), TableIndex::new(0));
        hall.seat_client(id(1), TableIndex::new(1));

        assert!(hall.tables()[0].is_empty());
        assert_eq!(hall.tables()[1].guests(), &[id(1)]);
        assert_eq!(hall.table_of(id(1)), Some(TableIndex::new(1)));
    }

    #[test]
    fn test_reset_tables_clears_seatings() {
        let mut hall = three_clients(2).build().unwrap();
        hall.add_table();
        hall.seat_client(id(3), TableIndex::new(0));
        hall.reset_tables();

        assert_eq!(hall.num_tables(), 0);
        assert_eq!(hall.table_of(id(3)), None);
        assert_eq!(hall.num_clients(), 3);
    }

    #[test]
    #[should_panic(expected = "called `Hall::seat_client` with table index out of bounds")]
    fn test_seat_at_missing_table_panics() {
        let mut hall = three_clients(2).build().unwrap();
        hall.seat_client(id(1), TableIndex::new(0));
    }

    #[test]
    #[should_panic(expected = "called `Hall::seat_client` with unknown client")]
    fn test_seat_unknown_client_panics() {
        let mut hall = three_clients(2).build().unwrap();
        hall.add_table();
        hall.seat_client(id(99), TableIndex::new(0));
    }

    #[test]
    fn test_display_formatting() {
        let mut hall = three_clients(3).build().unwrap();
        hall.add_table();
        hall.seat_client(id(1), TableIndex::new(0));
        hall.seat_client(id(3), TableIndex::new(0));

        let mut expected = String::new();
        expected.push_str("Seating Plan\n");
        expected.push_str("   Table Capacity: 3\n");
        expected.push_str("   Clients:        3\n");
        expected.push('\n');
        expected.push_str("   Table    | Occupancy | Guests\n");
        expected.push_str("   ---------+-----------+---------\n");
        expected.push_str("   0        | 2         | #1 #3\n");

        assert_eq!(format!("{}", hall), expected);
    }

    #[test]
    fn test_display_without_tables() {
        let hall = three_clients(3).build().unwrap();
        assert!(format!("{}", hall).contains("(No tables created)"));
    }
}
