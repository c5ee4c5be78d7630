//! Quiz simulation engine — runs N participants through the random-answer model.
//!
//! Each participant answers every question with an independent uniform draw
//! from `[1, num_options]`; a draw is correct when it equals the designated
//! correct option. The raw correct count follows
//! Binomial(`num_questions`, `1/num_options`); the knowledge shift is added
//! on top and the result clamped at `num_questions`.
//!
//! The runner owns the aggregation: scores stream into a fresh
//! [`ScoreAggregator`] and the finished distribution is handed back
//! read-only inside a [`SimulationRun`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::{ConfigError, QuizConfig};

use super::distribution::{FrequencyDistribution, ScoreAggregator};

/// Draw one answer uniformly from `[1, num_options]`.
#[inline(always)]
fn draw_answer(rng: &mut SmallRng, num_options: u32) -> u32 {
    rng.random_range(1..=num_options)
}

/// Simulate a single participant's quiz attempt, returning the final score.
///
/// The designated correct option is fixed at the last option (value
/// `num_options`); since all options are drawn uniformly, the choice does
/// not affect the output distribution. The shifted score never exceeds
/// `num_questions`.
pub fn simulate_participant_score(config: &QuizConfig, rng: &mut SmallRng) -> u32 {
    let mut raw_correct = 0u32;
    for _ in 0..config.num_questions {
        if draw_answer(rng, config.num_options) == config.num_options {
            raw_correct += 1;
        }
    }
    config
        .num_questions
        .min(raw_correct.saturating_add(config.knowledge_shift))
}

/// One completed simulation batch: the echoed configuration, the participant
/// count, and the finished score distribution.
#[derive(Clone, Debug)]
pub struct SimulationRun {
    pub config: QuizConfig,
    pub num_participants: u64,
    pub distribution: FrequencyDistribution,
}

/// Run the full simulation: validate the config, simulate `num_participants`
/// attempts, and aggregate the scores.
///
/// Validation happens before any entropy is consumed; an invalid config
/// produces no partial state. Zero participants yields an empty
/// distribution, not an error. Consumes exactly
/// `num_participants * num_questions` draws from `rng` in sequence, so a
/// seeded source gives reproducible distributions.
pub fn run_simulation(
    config: &QuizConfig,
    num_participants: u64,
    rng: &mut SmallRng,
) -> Result<SimulationRun, ConfigError> {
    config.validate()?;

    let mut aggregator = ScoreAggregator::new();
    for _ in 0..num_participants {
        aggregator.add_score(simulate_participant_score(config, rng));
    }

    Ok(SimulationRun {
        config: *config,
        num_participants,
        distribution: aggregator.into_distribution(),
    })
}

/// Convenience wrapper: run with a `SmallRng` seeded from `seed`.
pub fn run_simulation_seeded(
    config: &QuizConfig,
    num_participants: u64,
    seed: u64,
) -> Result<SimulationRun, ConfigError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    run_simulation(config, num_participants, &mut rng)
}
