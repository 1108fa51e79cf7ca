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

//! Errors raised by a seating run.

use crate::index::VertexIndex;
use banquet_model::client::ClientId;
use thiserror::Error;

/// A friend group does not fit at any table.
///
/// The title and message are fixed and meant for display to an operator; the
/// remaining fields point at the offending group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "{}: {} (vertex {} seats {occupancy}, capacity is {capacity})",
    InfeasibleSeatingError::TITLE,
    InfeasibleSeatingError::MESSAGE,
    .vertex.get()
)]
pub struct InfeasibleSeatingError {
    pub vertex: VertexIndex,
    pub occupancy: usize,
    pub capacity: usize,
}

impl InfeasibleSeatingError {
    pub const TITLE: &'static str = "Impossible to seat this venue";
    pub const MESSAGE: &'static str = "a group of friends is larger than the table capacity";

    #[inline]
    pub fn new(vertex: VertexIndex, occupancy: usize, capacity: usize) -> Self {
        Self {
            vertex,
            occupancy,
            capacity,
        }
    }

    #[inline]
    pub fn title(&self) -> &'static str {
        Self::TITLE
    }

    #[inline]
    pub fn message(&self) -> &'static str {
        Self::MESSAGE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    /// Raised before anything is written to the venue.
    #[error(transparent)]
    InfeasibleSeating(#[from] InfeasibleSeatingError),
    /// A lookup named a client the conflict graph was not built from.
    #[error("client {0} is not part of the conflict graph")]
    UnknownClient(ClientId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infeasible_display_and_accessors() {
        let err = InfeasibleSeatingError::new(VertexIndex::new(2), 5, 4);
        assert_eq!(err.title(), "Impossible to seat this venue");
        assert_eq!(
            err.message(),
            "a group of friends is larger than the table capacity"
        );
        assert_eq!(
            err.to_string(),
            "Impossible to seat this venue: a group of friends is larger than the table capacity (vertex 2 seats 5, capacity is 4)"
        );
    }

    #[test]
    fn test_seating_error_wraps_transparently() {
        let inner = InfeasibleSeatingError::new(VertexIndex::new(0), 3, 2);
        let err: SeatingError = inner.into();
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(
            SeatingError::UnknownClient(ClientId::new(9)).to_string(),
            "client #9 is not part of the conflict graph"
        );
    }
}
