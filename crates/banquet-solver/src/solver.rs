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

//! # Strategy Comparison
//!
//! Runs a list of coloring strategies against one venue and keeps the one that
//! needs the fewest tables.
//!
//! ## Highlights
//!
//! - Isolation: each strategy seats its own clone of the venue, so runs never
//!   accumulate tables on each other. The input venue is not touched.
//! - Order: strategies run in insertion order; ties on the table count go to
//!   the earliest strategy.
//! - Failures are kept per entry. An infeasible venue fails every strategy
//!   alike and `best()` returns `None`.
//!
//! ## Usage
//!
//! ```rust
//! use banquet_model::{client::ClientId, venue::HallBuilder};
//! use banquet_solver::solver::ComparisonBuilder;
//!
//! let mut builder = HallBuilder::new(2);
//! for i in 1..=4 {
//!     builder.add_client(ClientId::new(i));
//! }
//! builder.add_enemies(ClientId::new(1), ClientId::new(2));
//! let hall = builder.build().unwrap();
//!
//! let comparison = ComparisonBuilder::new().with_all_strategies().build();
//! let report = comparison.run(&hall);
//! let best = report.best().unwrap();
//! println!("{}", report);
//! assert!(best.tables().unwrap() >= 2);
//! ```

use banquet_coloring::{
    coloring::strategy::Strategy,
    engine::SeatingEngine,
    error::SeatingError,
    monitor::{coloring_monitor::ColoringMonitor, no_op::NoOperationMonitor},
    result::SeatingOutcome,
};
use banquet_model::venue::Venue;
use std::time::{Duration, Instant};

/// One strategy's run: its outcome and the venue copy it seated.
#[derive(Debug, Clone)]
pub struct ComparisonEntry<V> {
    strategy: Strategy,
    result: Result<SeatingOutcome, SeatingError>,
    venue: V,
}

impl<V> ComparisonEntry<V> {
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[inline]
    pub fn result(&self) -> &Result<SeatingOutcome, SeatingError> {
        &self.result
    }

    #[inline]
    pub fn outcome(&self) -> Option<&SeatingOutcome> {
        self.result.as_ref().ok()
    }

    /// The tables used, or `None` if the run failed.
    #[inline]
    pub fn tables(&self) -> Option<usize> {
        self.outcome().map(SeatingOutcome::tables)
    }

    /// The venue as this strategy left it.
    #[inline]
    pub fn venue(&self) -> &V {
        &self.venue
    }

    #[inline]
    pub fn into_venue(self) -> V {
        self.venue
    }
}

#[derive(Debug, Clone)]
pub struct ComparisonReport<V> {
    entries: Vec<ComparisonEntry<V>>,
    elapsed: Duration,
}

impl<V> ComparisonReport<V> {
    /// One entry per strategy, in run order.
    #[inline]
    pub fn entries(&self) -> &[ComparisonEntry<V>] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wall-clock time of all runs together.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The successful entry with the fewest tables; the earliest one on ties.
    pub fn best(&self) -> Option<&ComparisonEntry<V>> {
        let mut best: Option<(&ComparisonEntry<V>, usize)> = None;
        for entry in &self.entries {
            let Some(tables) = entry.tables() else {
                continue;
            };
            match best {
                Some((_, best_tables)) if tables >= best_tables => {}
                _ => best = Some((entry, tables)),
            }
        }
        best.map(|(entry, _)| entry)
    }

    /// Consumes the report and returns the best entry.
    pub fn into_best(self) -> Option<ComparisonEntry<V>> {
        let index = self
            .best()
            .and_then(|best| self.entries.iter().position(|e| std::ptr::eq(e, best)))?;
        self.entries.into_iter().nth(index)
    }
}

impl<V> std::fmt::Display for ComparisonReport<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Strategy Comparison ({:.2?})", self.elapsed)?;
        writeln!(f, "   {:<24} | {:<6} | {}", "Strategy", "Tables", "Elapsed")?;
        writeln!(f, "   {:-<24}-+-{:-<6}-+-{:-<10}", "", "", "")?;
        for entry in &self.entries {
            match entry.result() {
                Ok(outcome) => writeln!(
                    f,
                    "   {:<24} | {:<6} | {:.2?}",
                    entry.strategy.name(),
                    outcome.tables(),
                    outcome.elapsed()
                )?,
                Err(err) => writeln!(f, "   {:<24} | failed: {}", entry.strategy.name(), err)?,
            }
        }
        if let Some(best) = self.best() {
            writeln!(f, "   Best: {}", best.strategy.name())?;
        }
        Ok(())
    }
}

/// Runs several strategies, one after the other, on copies of a venue.
#[derive(Debug, Clone)]
pub struct StrategyComparison {
    strategies: Vec<Strategy>,
}

impl StrategyComparison {
    #[inline]
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    #[inline]
    pub fn run<V>(&self, venue: &V) -> ComparisonReport<V>
    where
        V: Venue + Clone,
    {
        self.run_monitored(venue, &mut NoOperationMonitor::new())
    }

    /// Like `run`, reporting every run to `monitor`.
    pub fn run_monitored<V>(
        &self,
        venue: &V,
        monitor: &mut dyn ColoringMonitor,
    ) -> ComparisonReport<V>
    where
        V: Venue + Clone,
    {
        let start = Instant::now();
        let mut engine = SeatingEngine::new();
        let mut entries = Vec::with_capacity(self.strategies.len());

        for &strategy in &self.strategies {
            let mut copy = venue.clone();
            let mut colorizer = strategy.colorizer();
            let result = engine.run(&mut copy, &mut colorizer, monitor);

            match &result {
                Ok(outcome) => tracing::info!(
                    strategy = strategy.name(),
                    tables = outcome.tables(),
                    elapsed = ?outcome.elapsed(),
                    "strategy finished"
                ),
                Err(err) => tracing::warn!(
                    strategy = strategy.name(),
                    error = %err,
                    "strategy failed"
                ),
            }

            entries.push(ComparisonEntry {
                strategy,
                result,
                venue: copy,
            });
        }

        let report = ComparisonReport {
            entries,
            elapsed: start.elapsed(),
        };
        if let Some(best) = report.best() {
            tracing::info!(
                strategy = best.strategy.name(),
                tables = best.tables(),
                "best strategy"
            );
        }
        report
    }
}

#[derive(Debug, Clone, Default)]
pub struct ComparisonBuilder {
    strategies: Vec<Strategy>,
}

impl ComparisonBuilder {
    #[inline]
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    #[inline]
    pub fn add_strategy(mut self, strategy: Strategy) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Appends the four built-in strategies in `Strategy::ALL` order.
    #[inline]
    pub fn with_all_strategies(mut self) -> Self {
        self.strategies.extend(Strategy::ALL);
        self
    }

    /// # Panics
    ///
    /// Panics if no strategy was added.
    pub fn build(self) -> StrategyComparison {
        assert!(
            !self.strategies.is_empty(),
            "called `ComparisonBuilder::build` with no strategies added"
        );
        StrategyComparison {
            strategies: self.strategies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use banquet_model::{
        client::ClientId,
        venue::{Hall, HallBuilder},
    };
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn id(i: u32) -> ClientId {
        ClientId::new(i)
    }

    fn friend_pairs(capacity: usize) -> Hall {
        let mut b = HallBuilder::new(capacity);
        for i in 1..=6 {
            b.add_client(id(i));
        }
        b.add_friends(id(1), id(2))
            .add_friends(id(3), id(4))
            .add_friends(id(5), id(6));
        b.build().unwrap()
    }

    #[test]
    fn test_runs_every_strategy_on_a_copy() {
        let hall = friend_pairs(4);
        let report = ComparisonBuilder::new()
            .with_all_strategies()
            .build()
            .run(&hall);

        assert_eq!(report.len(), 4);
        assert_eq!(hall.num_tables(), 0);
        let strategies: Vec<Strategy> = report.entries().iter().map(|e| e.strategy()).collect();
        assert_eq!(strategies, Strategy::ALL.to_vec());

        for entry in report.entries() {
            assert_eq!(entry.venue().num_tables(), entry.tables().unwrap());
            assert!(entry.venue().is_fully_seated());
        }
    }

    #[test]
    fn test_best_prefers_fewest_tables_then_earliest() {
        // Welsh Powell needs 3 tables here, the others 2
        let hall = friend_pairs(4);
        let report = ComparisonBuilder::new()
            .add_strategy(Strategy::WelshPowell)
            .add_strategy(Strategy::DSatur)
            .add_strategy(Strategy::Sequential)
            .build()
            .run(&hall);

        assert_eq!(report.entries()[0].tables(), Some(3));
        let best = report.best().unwrap();
        assert_eq!(best.strategy(), Strategy::DSatur);
        assert_eq!(best.tables(), Some(2));

        let owned = report.into_best().unwrap();
        assert_eq!(owned.strategy(), Strategy::DSatur);
        assert_eq!(owned.into_venue().num_tables(), 2);
    }

    #[test]
    fn test_infeasible_venue_has_no_best() {
        let mut b = HallBuilder::new(1);
        b.add_client(id(1)).add_client(id(2));
        b.add_friends(id(1), id(2));
        let hall = b.build().unwrap();

        let report = ComparisonBuilder::new()
            .with_all_strategies()
            .build()
            .run(&hall);
        assert!(report.best().is_none());
        assert!(report.entries().iter().all(|e| e.result().is_err()));
        assert!(report.entries().iter().all(|e| e.venue().num_tables() == 0));
        assert!(report.to_string().contains("failed: Impossible to seat this venue"));
    }

    #[test]
    fn test_best_is_minimal_on_random_halls() {
        let mut rng = StdRng::seed_from_u64(17);
        let comparison = ComparisonBuilder::new().with_all_strategies().build();

        for _ in 0..50 {
            let n = rng.random_range(1..30u32);
            let mut b = HallBuilder::new(rng.random_range(2..6usize));
            for i in 0..n {
                b.add_client(id(i));
            }
            for _ in 0..n {
                b.add_enemies(id(rng.random_range(0..n)), id(rng.random_range(0..n)));
            }
            let hall = b.build().unwrap();

            let report = comparison.run(&hall);
            let best = report.best().unwrap().tables().unwrap();
            let min = report.entries().iter().filter_map(|e| e.tables()).min().unwrap();
            assert_eq!(best, min);
        }
    }

    #[test]
    fn test_display_lists_entries() {
        let report = ComparisonBuilder::new()
            .add_strategy(Strategy::Sequential)
            .build()
            .run(&friend_pairs(10));
        let text = report.to_string();
        assert!(text.starts_with("Strategy Comparison"));
        assert!(text.contains("Sequential Coloring"));
        assert!(text.contains("Best: Sequential Coloring"));
    }

    #[test]
    #[should_panic(expected = "called `ComparisonBuilder::build` with no strategies added")]
    fn test_empty_comparison_panics() {
        ComparisonBuilder::new().build();
    }
}
