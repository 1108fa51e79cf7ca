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

//! Banquet Coloring: seating as capacity-aware graph coloring
//!
//! Turns a `banquet_model::venue::Venue` into a conflict graph, colors it with
//! one of four greedy heuristics and writes the result back as tables and
//! seatings. A color is a table in waiting: vertices sharing a color sit at the
//! same table.
//!
//! Core flow
//! - Build a `graph::conflict::ConflictGraph` (friend groups become weighted
//!   vertices, hostile relations become edges).
//! - Reject venues with a friend group larger than the table capacity
//!   (`feasibility`).
//! - Color the graph with a `coloring::colorizer::Colorizer`.
//! - Apply the coloring to the venue (`apply`).
//! - `engine::SeatingEngine` runs all of the above, reports to a monitor and
//!   returns a `result::SeatingOutcome`.
//!
//! Module map
//! - `graph`: vertices, union-find and the conflict graph.
//! - `feasibility`: the occupancy check run before coloring.
//! - `coloring`: the `Coloring` result, the `Colorizer` trait, the four
//!   strategies and the `Strategy` selector.
//! - `apply`: table creation and seating.
//! - `engine`: run orchestration and the run phase state machine.
//! - `monitor`: observers of a run (no-op, composite, tracing log).
//! - `stats`: counters and timings.
//! - `result`: run outcomes.
//! - `error`: error types.

pub mod apply;
pub mod coloring;
pub mod engine;
pub mod error;
pub mod feasibility;
pub mod graph;
pub mod index;
pub mod monitor;
pub mod result;
pub mod stats;
