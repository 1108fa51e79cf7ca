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

//! Strategy selection.
//!
//! `Strategy` names the four built-in colorizers, parses them from short keys
//! and runs one of them end to end against a venue.

use crate::{
    coloring::{
        colorizer::Colorizer, dsatur::DSaturColorizer, largest_degree::LargestDegreeColorizer,
        sequential::SequentialColorizer, welsh_powell::WelshPowellColorizer,
    },
    engine::SeatingEngine,
    error::SeatingError,
    monitor::no_op::NoOperationMonitor,
    result::SeatingOutcome,
};
use banquet_model::venue::Venue;
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Strategy {
    Sequential,
    LargestDegreeOrdering,
    WelshPowell,
    DSatur,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Sequential,
        Strategy::LargestDegreeOrdering,
        Strategy::WelshPowell,
        Strategy::DSatur,
    ];

    /// The human-readable name; equal to the colorizer's `name()`.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Sequential => "Sequential Coloring",
            Strategy::LargestDegreeOrdering => "Largest Degree Ordering",
            Strategy::WelshPowell => "Welsh Powell",
            Strategy::DSatur => "DSatur",
        }
    }

    /// The key accepted by `FromStr`.
    pub fn key(&self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::LargestDegreeOrdering => "ldo",
            Strategy::WelshPowell => "welsh-powell",
            Strategy::DSatur => "dsatur",
        }
    }

    pub fn colorizer(&self) -> Box<dyn Colorizer> {
        match self {
            Strategy::Sequential => Box::new(SequentialColorizer::new()),
            Strategy::LargestDegreeOrdering => Box::new(LargestDegreeColorizer::new()),
            Strategy::WelshPowell => Box::new(WelshPowellColorizer::new()),
            Strategy::DSatur => Box::new(DSaturColorizer::new()),
        }
    }

    /// Seats every client of `venue` using this strategy.
    ///
    /// On error the venue is left untouched.
    pub fn run<V>(&self, venue: &mut V) -> Result<SeatingOutcome, SeatingError>
    where
        V: Venue + ?Sized,
    {
        let mut colorizer = self.colorizer();
        SeatingEngine::new().run(venue, &mut colorizer, &mut NoOperationMonitor::new())
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{0}', expected one of: sequential, ldo, welsh-powell, dsatur")]
pub struct ParseStrategyError(pub String);

impl std::str::FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| ParseStrategyError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use banquet_model::{client::ClientId, venue::HallBuilder};

    #[test]
    fn test_names_match_colorizers() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.colorizer().name(), strategy.name());
            assert_eq!(strategy.to_string(), strategy.name());
        }
    }

    #[test]
    fn test_parse_keys_case_insensitive() {
        assert_eq!("sequential".parse::<Strategy>(), Ok(Strategy::Sequential));
        assert_eq!("LDO".parse::<Strategy>(), Ok(Strategy::LargestDegreeOrdering));
        assert_eq!(" Welsh-Powell ".parse::<Strategy>(), Ok(Strategy::WelshPowell));
        assert_eq!("dSaTuR".parse::<Strategy>(), Ok(Strategy::DSatur));
        for strategy in Strategy::ALL {
            assert_eq!(strategy.key().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = "tabu".parse::<Strategy>().unwrap_err();
        assert_eq!(err, ParseStrategyError("tabu".to_owned()));
        assert!(err.to_string().starts_with("unknown strategy 'tabu'"));
    }

    #[test]
    fn test_run_seats_the_venue() {
        let mut b = HallBuilder::new(2);
        for i in 1..=3 {
            b.add_client(ClientId::new(i));
        }
        let mut hall = b.build().unwrap();

        let outcome = Strategy::Sequential.run(&mut hall).unwrap();
        assert_eq!(outcome.strategy(), "Sequential Coloring");
        assert_eq!(outcome.tables(), 2);
        assert_eq!(hall.num_tables(), 2);
        assert!(hall.is_fully_seated());
    }
}
