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

use crate::{coloring::Coloring, stats::ColoringStatistics};
use std::time::Duration;

/// The result of a successful seating run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatingOutcome {
    strategy: String,
    elapsed: Duration,
    tables: usize,
    coloring: Coloring,
    statistics: ColoringStatistics,
}

impl SeatingOutcome {
    pub fn new<S>(
        strategy: S,
        elapsed: Duration,
        tables: usize,
        coloring: Coloring,
        statistics: ColoringStatistics,
    ) -> Self
    where
        S: Into<String>,
    {
        Self {
            strategy: strategy.into(),
            elapsed,
            tables,
            coloring,
            statistics,
        }
    }

    #[inline]
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Wall-clock time of the whole run.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The number of tables the run created.
    #[inline]
    pub fn tables(&self) -> usize {
        self.tables
    }

    #[inline]
    pub fn coloring(&self) -> &Coloring {
        &self.coloring
    }

    #[inline]
    pub fn statistics(&self) -> &ColoringStatistics {
        &self.statistics
    }

    /// `"<elapsed ms>/<tables>"`.
    pub fn summary(&self) -> String {
        format!("{}/{}", self.elapsed.as_millis(), self.tables)
    }
}

impl std::fmt::Display for SeatingOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SeatingOutcome(strategy: {}, tables: {}, elapsed: {:.2?})",
            self.strategy, self.tables, self.elapsed
        )
    }
}
