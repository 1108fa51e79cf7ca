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

//! # Banquet Model
//!
//! **The domain model for the Banquet seating solver.**
//!
//! This crate defines who has to be seated and where they can sit. It is the
//! collaborator the coloring engine (`banquet_coloring`) reads clients from
//! and writes table assignments back to.
//!
//! ## Architecture
//!
//! * **`index`**: Strongly-typed wrappers (`ClientIndex`, `TableIndex`) so a
//!   client position can never be used where a table index is expected.
//! * **`client`**: `ClientId` and the `Client` record with its friend and enemy lists.
//! * **`venue`**: The `Venue` trait the engine depends on, plus `Hall`
//!   (in-memory venue) and `HallBuilder` (validated construction).
//! * **`loading`**: A whitespace-delimited text loader producing a `Hall`.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Identities and positions are distinct types.
//! 2.  **Fail-Fast**: `HallBuilder::build` validates capacity, duplicate identities
//!     and dangling relations, so the engine never sees an inconsistent hall.
//! 3.  **Asymmetric input, symmetric meaning**: a friendship or enmity declared on
//!     one side only is as binding as one declared on both.

pub mod client;
pub mod index;
pub mod loading;
pub mod venue;
