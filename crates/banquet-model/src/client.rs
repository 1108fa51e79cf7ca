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

//! Clients and their relationships.
//!
//! A `Client` is identified by a `ClientId` and carries two lists of other
//! identities: the people it must sit with and the people it must never sit
//! with. Neither list has to be mirrored on the other side; consumers treat a
//! relation as declared if either record names it.

/// The numeric identity of a client.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ClientId(u32);

impl ClientId {
    #[inline(always)]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for ClientId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl From<ClientId> for u32 {
    fn from(id: ClientId) -> Self {
        id.0
    }
}

/// A person to be seated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Client {
    id: ClientId,
    friends: Vec<ClientId>,
    enemies: Vec<ClientId>,
}

impl Client {
    /// Creates a client without any relationships.
    #[inline]
    pub fn new(id: ClientId) -> Self {
        Self {
            id,
            friends: Vec::new(),
            enemies: Vec::new(),
        }
    }

    /// Creates a client with the given friend and enemy lists.
    ///
    /// Duplicate entries are dropped; order of first appearance is kept.
    pub fn with_relations<F, E>(id: ClientId, friends: F, enemies: E) -> Self
    where
        F: IntoIterator<Item = ClientId>,
        E: IntoIterator<Item = ClientId>,
    {
        let mut client = Self::new(id);
        for friend in friends {
            client.add_friend(friend);
        }
        for enemy in enemies {
            client.add_enemy(enemy);
        }
        client
    }

    #[inline]
    pub fn id(&self) -> ClientId {
        self.id
    }

    /// The identities this client declared as friends.
    #[inline]
    pub fn friends(&self) -> &[ClientId] {
        &self.friends
    }

    /// The identities this client declared as enemies.
    #[inline]
    pub fn enemies(&self) -> &[ClientId] {
        &self.enemies
    }

    #[inline]
    pub fn is_friend_of(&self, other: ClientId) -> bool {
        self.friends.contains(&other)
    }

    #[inline]
    pub fn is_enemy_of(&self, other: ClientId) -> bool {
        self.enemies.contains(&other)
    }

    /// Declares `other` a friend. Returns `false` if it already was one.
    pub fn add_friend(&mut self, other: ClientId) -> bool {
        if self.friends.contains(&other) {
            return false;
        }
        self.friends.push(other);
        true
    }

    /// Declares `other` an enemy. Returns `false` if it already was one.
    pub fn add_enemy(&mut self, other: ClientId) -> bool {
        if self.enemies.contains(&other) {
            return false;
        }
        self.enemies.push(other);
        true
    }
}

impl std::fmt::Display for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Client({}, friends: {}, enemies: {})",
            self.id,
            self.friends.len(),
            self.enemies.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(i: u32) -> ClientId {
        ClientId::new(i)
    }

    #[test]
    fn test_new_client_has_no_relations() {
        let c = Client::new(id(1));
        assert_eq!(c.id(), id(1));
        assert!(c.friends().is_empty());
        assert!(c.enemies().is_empty());
    }

    #[test]
    fn test_add_relations_is_idempotent() {
        let mut c = Client::new(id(1));
        assert!(c.add_friend(id(2)));
        assert!(!c.add_friend(id(2)));
        assert!(c.add_enemy(id(3)));
        assert!(!c.add_enemy(id(3)));
        assert_eq!(c.friends(), &[id(2)]);
        assert_eq!(c.enemies(), &[id(3)]);
        assert!(c.is_friend_of(id(2)));
        assert!(c.is_enemy_of(id(3)));
        assert!(!c.is_enemy_of(id(2)));
    }

    #[test]
    fn test_with_relations_drops_duplicates_in_order() {
        let c = Client::with_relations(id(9), [id(3), id(1), id(3)], [id(4), id(4)]);
        assert_eq!(c.friends(), &[id(3), id(1)]);
        assert_eq!(c.enemies(), &[id(4)]);
    }

    #[test]
    fn test_display() {
        let c = Client::with_relations(id(5), [id(1)], [id(2), id(3)]);
        assert_eq!(format!("{}", c), "Client(#5, friends: 1, enemies: 2)");
    }
}
