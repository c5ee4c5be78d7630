//! # Quizsim — quiz score distribution simulator
//!
//! Models the score distribution of many independent participants answering
//! multiple-choice questions at random, optionally shifted by an assumed
//! baseline of prior knowledge.
//!
//! ## Model
//!
//! Each participant answers `num_questions` questions; every answer is an
//! independent uniform draw from `[1, num_options]`, counted as correct when
//! it hits the designated correct option (fixed at the last option). The raw
//! correct count therefore follows Binomial(`num_questions`, `1/num_options`).
//! A constant `knowledge_shift` is added to the raw count and the result is
//! clamped at `num_questions`.
//!
//! ## Modules
//!
//! - [`config`]: Quiz parameters and eager validation
//! - [`simulation`]: Participant simulation, frequency aggregation, statistics
//! - [`report`]: Console histogram and JSON export of a finished run
//!
//! The random source is an explicit seedable [`rand::rngs::SmallRng`] passed
//! into the runner, so identical seeds produce identical distributions.

pub mod config;
pub mod report;
pub mod simulation;
