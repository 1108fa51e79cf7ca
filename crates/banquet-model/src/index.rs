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

//! # Strongly Typed Indices
//!
//! Phantom-tagged wrappers around `usize`. A `TypedIndex<T>` compiles down to
//! a plain `usize` but carries its index space in the type, so client
//! positions, table numbers and (in `banquet_coloring`) vertices and colors
//! cannot be mixed up.
//!
//! ```rust
//! use banquet_model::index::{TableIndex, TypedIndex, TypedIndexTag};
//!
//! let table = TableIndex::new(3);
//! assert_eq!(table.get(), 3);
//! assert_eq!(format!("{}", table), "TableIndex(3)");
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct SeatTag;
//! impl TypedIndexTag for SeatTag { const NAME: &'static str = "SeatIndex"; }
//! type SeatIndex = TypedIndex<SeatTag>;
//! assert_eq!(format!("{:?}", SeatIndex::new(1)), "SeatIndex(1)");
//! ```

/// Names an index space for `Display` and `Debug` output.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A `usize` index bound to the index space `T`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying `usize`.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Returns the index directly after this one.
    #[inline(always)]
    pub const fn next(&self) -> Self {
        Self::new(self.index + 1)
    }

    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.index == 0
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    fn from(typed_index: TypedIndex<T>) -> Self {
        typed_index.index
    }
}

/// A tag type for client positions inside a venue.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ClientIndexTag;

impl TypedIndexTag for ClientIndexTag {
    const NAME: &'static str = "ClientIndex";
}

/// The position of a client in `Venue::clients`.
pub type ClientIndex = TypedIndex<ClientIndexTag>;

/// A tag type for table indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TableIndexTag;

impl TypedIndexTag for TableIndexTag {
    const NAME: &'static str = "TableIndex";
}

/// A zero-based table index.
pub type TableIndex = TypedIndex<TableIndexTag>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_get_and_next() {
        let idx = TableIndex::new(4);
        assert_eq!(idx.get(), 4);
        assert_eq!(idx.next().get(), 5);
        assert!(!idx.is_zero());
        assert!(TableIndex::new(0).is_zero());
    }

    #[test]
    fn test_conversions() {
        let idx: ClientIndex = 42.into();
        assert_eq!(idx.get(), 42);
        let raw: usize = idx.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_display_uses_tag_name() {
        assert_eq!(format!("{}", ClientIndex::new(7)), "ClientIndex(7)");
        assert_eq!(format!("{:?}", TableIndex::new(2)), "TableIndex(2)");
    }

    #[test]
    fn test_ordering_follows_raw_index() {
        let mut tables = vec![TableIndex::new(3), TableIndex::new(0), TableIndex::new(1)];
        tables.sort();
        assert_eq!(
            tables,
            vec![TableIndex::new(0), TableIndex::new(1), TableIndex::new(3)]
        );
    }
}
