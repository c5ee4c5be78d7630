//! Quiz simulation and statistics.
//!
//! - [`engine`]: Core simulation (run N participants through the random-answer model)
//! - [`distribution`]: Score frequency aggregation
//! - [`statistics`]: Summary statistics over a finished distribution

pub mod distribution;
pub mod engine;
pub mod statistics;

// Re-export commonly used items
pub use distribution::{FrequencyDistribution, ScoreAggregator};
pub use engine::{
    run_simulation, run_simulation_seeded, simulate_participant_score, SimulationRun,
};
pub use statistics::{compute_statistics, ScoreStatistics};
