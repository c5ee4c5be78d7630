//! Reporting — render or export a finished simulation run.
//!
//! Reporters consume a read-only [`SimulationRun`]; the statistical core has
//! no dependency on presentation. Two implementations are provided: a sorted
//! console histogram and a pretty-printed JSON report file.

use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

use crate::config::QuizConfig;
use crate::simulation::statistics::{compute_statistics, ScoreStatistics};
use crate::simulation::{FrequencyDistribution, SimulationRun};

/// Consumes a finished run and presents it somewhere.
pub trait DistributionReporter {
    fn report(&mut self, run: &SimulationRun) -> io::Result<()>;
}

// ── Console histogram ───────────────────────────────────────────────

/// Text histogram writer: one row per score that occurred, in ascending
/// score order, with a bar scaled to the most frequent score.
pub struct ConsoleReporter<W: Write> {
    out: W,
    max_bar_width: usize,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            max_bar_width: 50,
        }
    }
}

impl<W: Write> DistributionReporter for ConsoleReporter<W> {
    fn report(&mut self, run: &SimulationRun) -> io::Result<()> {
        writeln!(
            self.out,
            "Score distribution: {} participants, {} questions, {} options, shift {} (scores 0..={})",
            run.num_participants,
            run.config.num_questions,
            run.config.num_options,
            run.config.knowledge_shift,
            run.config.max_score(),
        )?;

        if run.distribution.is_empty() {
            writeln!(self.out, "  (no participants)")?;
            return Ok(());
        }

        let max_count = run.distribution.iter().map(|(_, c)| c).max().unwrap_or(1);
        for (score, count) in run.distribution.iter() {
            let bar_len =
                ((count as f64 / max_count as f64) * self.max_bar_width as f64).round() as usize;
            writeln!(
                self.out,
                "  {:>4} | {:<width$} {}",
                score,
                "#".repeat(bar_len.max(1)),
                count,
                width = self.max_bar_width,
            )?;
        }
        Ok(())
    }
}

// ── JSON export ─────────────────────────────────────────────────────

/// Serializable report bundle: config echo, statistics, and the raw counts.
#[derive(Serialize)]
struct QuizReport<'a> {
    config: &'a QuizConfig,
    num_participants: u64,
    statistics: Option<ScoreStatistics>,
    distribution: &'a FrequencyDistribution,
}

/// Save a run as a pretty-printed JSON report, creating parent directories.
pub fn save_report(run: &SimulationRun, path: &str) -> io::Result<()> {
    let report = QuizReport {
        config: &run.config,
        num_participants: run.num_participants,
        statistics: compute_statistics(&run.config, &run.distribution),
        distribution: &run.distribution,
    };
    if let Some(parent) = Path::new(path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(path, json)
}

/// Reporter that writes the JSON report to a fixed path.
pub struct JsonReporter {
    pub path: String,
}

impl DistributionReporter for JsonReporter {
    fn report(&mut self, run: &SimulationRun) -> io::Result<()> {
        save_report(run, &self.path)
    }
}
