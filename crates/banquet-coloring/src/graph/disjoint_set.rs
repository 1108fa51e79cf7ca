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

//! Union-find over dense `usize` keys.
//!
//! Path halving in `find` and union by size keep both operations near
//! constant time. Everything is iterative, so arbitrarily long friend chains
//! never touch the call stack.

#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    num_sets: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets `0..len`.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            num_sets: len,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// The number of disjoint sets.
    #[inline]
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is out of bounds.
    pub fn find(&mut self, mut x: usize) -> usize {
        assert!(
            x < self.parent.len(),
            "called `DisjointSet::find` with key out of bounds: the len is {} but the key is {}",
            self.parent.len(),
            x
        );

        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merges the sets containing `a` and `b`. Returns `false` if they were
    /// already the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut ra = self.find(a);
        let mut rb = self.find(b);
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.num_sets -= 1;
        true
    }

    #[inline]
    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// The number of keys in the set containing `x`.
    #[inline]
    pub fn set_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut ds = DisjointSet::new(4);
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.num_sets(), 4);
        for i in 0..4 {
            assert_eq!(ds.find(i), i);
            assert_eq!(ds.set_size(i), 1);
        }
    }

    #[test]
    fn test_union_merges_and_counts() {
        let mut ds = DisjointSet::new(5);
        assert!(ds.union(0, 1));
        assert!(ds.union(3, 4));
        assert!(!ds.union(1, 0));
        assert_eq!(ds.num_sets(), 3);
        assert!(ds.same_set(0, 1));
        assert!(!ds.same_set(1, 3));
        assert_eq!(ds.set_size(4), 2);

        assert!(ds.union(1, 4));
        assert!(ds.same_set(0, 3));
        assert_eq!(ds.set_size(0), 4);
        assert_eq!(ds.set_size(2), 1);
    }

    #[test]
    fn test_long_chain_and_cycle() {
        let n = 100_000;
        let mut ds = DisjointSet::new(n);
        for i in 1..n {
            ds.union(i - 1, i);
        }
        // closing the cycle is a no-op
        assert!(!ds.union(n - 1, 0));
        assert_eq!(ds.num_sets(), 1);
        assert_eq!(ds.set_size(n / 2), n);
    }

    #[test]
    #[should_panic(expected = "called `DisjointSet::find` with key out of bounds")]
    fn test_find_out_of_bounds_panics() {
        let mut ds = DisjointSet::new(2);
        ds.find(2);
    }

    #[test]
    fn test_empty() {
        let ds = DisjointSet::new(0);
        assert!(ds.is_empty());
        assert_eq!(ds.num_sets(), 0);
    }
}
