//! Score frequency aggregation.
//!
//! [`ScoreAggregator`] collects a stream of participant scores;
//! [`FrequencyDistribution`] is the finished score → count mapping.
//! A `BTreeMap` keeps iteration sorted by score for display.

use serde::Serialize;
use std::collections::BTreeMap;

/// Accumulates participant scores during a run.
///
/// A fresh aggregator is created per run; there is no removal or reset.
/// Accepts any score — range validity is the caller's responsibility.
#[derive(Debug, Default)]
pub struct ScoreAggregator {
    counts: BTreeMap<u32, u64>,
}

impl ScoreAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `score`, inserting with count 1 when absent.
    pub fn add_score(&mut self, score: u32) {
        *self.counts.entry(score).or_insert(0) += 1;
    }

    /// Snapshot of the distribution so far. Does not mutate the aggregator.
    pub fn distribution(&self) -> FrequencyDistribution {
        FrequencyDistribution {
            counts: self.counts.clone(),
        }
    }

    /// Consume the aggregator, yielding the final distribution.
    pub fn into_distribution(self) -> FrequencyDistribution {
        FrequencyDistribution {
            counts: self.counts,
        }
    }
}

/// Mapping from score to the number of participants who achieved it.
///
/// Invariant: counts are strictly positive and sum to the number of
/// participants aggregated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyDistribution {
    counts: BTreeMap<u32, u64>,
}

impl FrequencyDistribution {
    /// Count for one score (0 when the score never occurred).
    pub fn count(&self, score: u32) -> u64 {
        self.counts.get(&score).copied().unwrap_or(0)
    }

    /// Total participants aggregated (sum of all counts).
    pub fn num_participants(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(score, count)` pairs in ascending score order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.counts.iter().map(|(&score, &count)| (score, count))
    }

    pub fn min_score(&self) -> Option<u32> {
        self.counts.keys().next().copied()
    }

    pub fn max_score(&self) -> Option<u32> {
        self.counts.keys().next_back().copied()
    }

    /// Merge a partial distribution by summing counts per score.
    ///
    /// Supports combining shards simulated with independent random streams.
    pub fn merge(&mut self, other: &FrequencyDistribution) {
        for (score, count) in other.iter() {
            *self.counts.entry(score).or_insert(0) += count;
        }
    }
}
