//! Summary statistics over a finished score distribution.
//!
//! Computed directly from the frequency counts (no per-participant score
//! vector is kept): mean, population std-dev, min/max, and median, plus the
//! binomial raw mean echoed from the config for sanity checks against the
//! empirical mean.

use serde::Serialize;

use crate::config::QuizConfig;

use super::distribution::FrequencyDistribution;

#[derive(Debug, Serialize)]
pub struct ScoreStatistics {
    pub num_participants: u64,
    pub mean: f64,
    pub std_dev: f64,
    pub min: u32,
    pub max: u32,
    pub median: u32,
    /// Binomial mean `num_questions / num_options` of the raw count, before
    /// the knowledge shift.
    pub expected_raw_mean: f64,
}

/// Compute summary statistics, or `None` for an empty distribution.
pub fn compute_statistics(
    config: &QuizConfig,
    distribution: &FrequencyDistribution,
) -> Option<ScoreStatistics> {
    let num_participants = distribution.num_participants();
    if num_participants == 0 {
        return None;
    }
    let n = num_participants as f64;

    let sum: f64 = distribution
        .iter()
        .map(|(score, count)| score as f64 * count as f64)
        .sum();
    let mean = sum / n;

    let variance: f64 = distribution
        .iter()
        .map(|(score, count)| (score as f64 - mean).powi(2) * count as f64)
        .sum::<f64>()
        / n;

    // Median: the score of the participant at sorted index n/2.
    let target = num_participants / 2 + 1;
    let mut cumulative = 0u64;
    let mut median = 0u32;
    for (score, count) in distribution.iter() {
        cumulative += count;
        if cumulative >= target {
            median = score;
            break;
        }
    }

    Some(ScoreStatistics {
        num_participants,
        mean,
        std_dev: variance.sqrt(),
        min: distribution.min_score()?,
        max: distribution.max_score()?,
        median,
        expected_raw_mean: config.expected_raw_mean(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::distribution::ScoreAggregator;

    fn dist_of(scores: &[u32]) -> FrequencyDistribution {
        let mut agg = ScoreAggregator::new();
        for &s in scores {
            agg.add_score(s);
        }
        agg.into_distribution()
    }

    #[test]
    fn test_empty_yields_none() {
        let config = QuizConfig::default();
        assert!(compute_statistics(&config, &dist_of(&[])).is_none());
    }

    #[test]
    fn test_basic_statistics() {
        let config = QuizConfig::new(20, 4, 0).unwrap();
        let stats = compute_statistics(&config, &dist_of(&[2, 4, 4, 6])).unwrap();
        assert_eq!(stats.num_participants, 4);
        assert!((stats.mean - 4.0).abs() < 1e-12);
        // Population variance: ((2-4)^2 + 0 + 0 + (6-4)^2) / 4 = 2
        assert!((stats.std_dev - 2.0f64.sqrt()).abs() < 1e-12);
        assert_eq!(stats.min, 2);
        assert_eq!(stats.max, 6);
        assert!((stats.expected_raw_mean - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_median_odd_count() {
        let config = QuizConfig::default();
        // Sorted scores [1, 1, 3]: index 3/2 = 1 -> 1.
        let stats = compute_statistics(&config, &dist_of(&[3, 1, 1])).unwrap();
        assert_eq!(stats.median, 1);
    }

    #[test]
    fn test_median_even_count() {
        let config = QuizConfig::default();
        // Sorted scores [1, 1, 3, 3]: index 4/2 = 2 -> 3.
        let stats = compute_statistics(&config, &dist_of(&[1, 3, 1, 3])).unwrap();
        assert_eq!(stats.median, 3);
    }

    #[test]
    fn test_single_score() {
        let config = QuizConfig::default();
        let stats = compute_statistics(&config, &dist_of(&[7])).unwrap();
        assert_eq!(stats.min, 7);
        assert_eq!(stats.max, 7);
        assert_eq!(stats.median, 7);
        assert!((stats.mean - 7.0).abs() < 1e-12);
        assert_eq!(stats.std_dev, 0.0);
    }
}
