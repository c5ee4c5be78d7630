//! Quiz configuration and validation.
//!
//! A [`QuizConfig`] is an immutable value describing one simulated quiz.
//! Constraints are validated eagerly (before any simulation work) and never
//! silently clamped; only the computed score is clamped, at use time.

use serde::Serialize;
use thiserror::Error;

/// Configuration constraint violations, detected before simulation starts.
///
/// Negative values for the knowledge shift and the participant count are
/// unrepresentable (unsigned types), so only the two remaining constraints
/// need runtime checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `num_questions` must be positive.
    #[error("num_questions must be positive (got 0)")]
    NoQuestions,

    /// `num_options` must be at least 2.
    #[error("num_options must be at least 2 (got {0})")]
    TooFewOptions(u32),
}

/// Parameters of one simulated quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QuizConfig {
    /// Number of questions per participant (positive).
    pub num_questions: u32,
    /// Number of answer options per question (>= 2).
    pub num_options: u32,
    /// Correct answers assumed known in advance; added to the raw count and
    /// clamped at `num_questions`. May exceed `num_questions`.
    pub knowledge_shift: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            num_questions: 20,
            num_options: 4,
            knowledge_shift: 0,
        }
    }
}

impl QuizConfig {
    /// Build a validated configuration.
    pub fn new(
        num_questions: u32,
        num_options: u32,
        knowledge_shift: u32,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            num_questions,
            num_options,
            knowledge_shift,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check all constraints, reporting the first violated one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_questions == 0 {
            return Err(ConfigError::NoQuestions);
        }
        if self.num_options < 2 {
            return Err(ConfigError::TooFewOptions(self.num_options));
        }
        Ok(())
    }

    /// Maximum achievable score (axis bound for histograms).
    pub fn max_score(&self) -> u32 {
        self.num_questions
    }

    /// Mean of the raw correct count before the shift:
    /// `num_questions / num_options` (binomial mean).
    pub fn expected_raw_mean(&self) -> f64 {
        self.num_questions as f64 / self.num_options as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.num_questions, 20);
        assert_eq!(config.num_options, 4);
        assert_eq!(config.knowledge_shift, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_valid() {
        let config = QuizConfig::new(10, 3, 2).unwrap();
        assert_eq!(config.num_questions, 10);
        assert_eq!(config.num_options, 3);
        assert_eq!(config.knowledge_shift, 2);
    }

    #[test]
    fn test_zero_questions_rejected() {
        assert_eq!(QuizConfig::new(0, 4, 0), Err(ConfigError::NoQuestions));
    }

    #[test]
    fn test_too_few_options_rejected() {
        assert_eq!(QuizConfig::new(20, 1, 0), Err(ConfigError::TooFewOptions(1)));
        assert_eq!(QuizConfig::new(20, 0, 0), Err(ConfigError::TooFewOptions(0)));
    }

    #[test]
    fn test_shift_may_exceed_questions() {
        // Oversized shift is valid at config time; the score clamps at use time.
        assert!(QuizConfig::new(20, 4, 25).is_ok());
    }

    #[test]
    fn test_expected_raw_mean() {
        let config = QuizConfig::new(20, 4, 0).unwrap();
        assert!((config.expected_raw_mean() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_error_messages_name_the_parameter() {
        let msg = ConfigError::NoQuestions.to_string();
        assert!(msg.contains("num_questions"), "{msg}");
        let msg = ConfigError::TooFewOptions(1).to_string();
        assert!(msg.contains("num_options"), "{msg}");
    }
}
