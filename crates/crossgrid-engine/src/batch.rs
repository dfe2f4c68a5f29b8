//! Multi-attempt driver.
//!
//! Attempts are independent: each builds its own word set and RNG from
//! its derived seed. With more than one worker, attempt indices are fed
//! through a bounded crossbeam channel to scoped threads and the results
//! are sorted back into index order, so the report does not depend on
//! the worker count or on scheduling.

use std::thread;

use crossbeam_channel::{bounded, unbounded};
use crossgrid_core::AttemptError;
use tracing::info;

use crate::attempt::{run_attempt, AttemptReport};
use crate::config::{BatchConfig, ConfigError};

/// Outcome of one attempt in a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptRecord {
    /// Attempt index, `0..attempts`.
    pub index: u32,
    /// Seed the attempt ran with.
    pub seed: u64,
    /// The layout, or why the attempt failed.
    pub outcome: Result<AttemptReport, AttemptError>,
}

impl AttemptRecord {
    /// The report of a successful attempt.
    pub fn report(&self) -> Option<&AttemptReport> {
        self.outcome.as_ref().ok()
    }
}

/// Every attempt of a batch, in index order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchReport {
    records: Vec<AttemptRecord>,
}

impl BatchReport {
    /// All records, in index order.
    pub fn records(&self) -> &[AttemptRecord] {
        &self.records
    }

    /// Successful attempts, in index order.
    pub fn successes(&self) -> impl Iterator<Item = (&AttemptRecord, &AttemptReport)> + '_ {
        self.records
            .iter()
            .filter_map(|r| r.report().map(|report| (r, report)))
    }

    /// Number of successful attempts.
    pub fn success_count(&self) -> usize {
        self.successes().count()
    }

    /// Number of failed attempts.
    pub fn failure_count(&self) -> usize {
        self.records.len() - self.success_count()
    }

    /// The attempt that placed the most words; ties go to the smaller
    /// area, then to the lower index.
    pub fn best(&self) -> Option<&AttemptRecord> {
        let mut best: Option<(&AttemptRecord, &AttemptReport)> = None;
        for (record, report) in self.successes() {
            let better = match best {
                None => true,
                Some((_, current)) => {
                    let (a, b) = (&report.layout, &current.layout);
                    a.placed_count() > b.placed_count()
                        || (a.placed_count() == b.placed_count() && a.area() < b.area())
                }
            };
            if better {
                best = Some((record, report));
            }
        }
        best.map(|(record, _)| record)
    }
}

/// Validate `config` and run all its attempts.
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport, ConfigError> {
    config.validate()?;

    let records = if config.workers == 1 || config.attempts == 1 {
        run_sequential(config)
    } else {
        run_pooled(config)
    };
    let report = BatchReport { records };

    let best = report
        .best()
        .and_then(AttemptRecord::report)
        .map_or(0, |r| r.layout.placed_count());
    info!(
        attempts = config.attempts,
        workers = config.workers,
        succeeded = report.success_count(),
        failed = report.failure_count(),
        best_placed = best,
        "batch finished"
    );

    Ok(report)
}

fn run_one(config: &BatchConfig, index: u32) -> AttemptRecord {
    let attempt = config.attempt_config(index);
    AttemptRecord {
        index,
        seed: attempt.seed,
        outcome: run_attempt(&attempt),
    }
}

fn run_sequential(config: &BatchConfig) -> Vec<AttemptRecord> {
    (0..config.attempts).map(|i| run_one(config, i)).collect()
}

fn run_pooled(config: &BatchConfig) -> Vec<AttemptRecord> {
    let workers = config.workers.min(config.attempts as usize);
    let (task_tx, task_rx) = bounded::<u32>(workers * 2);
    let (result_tx, result_rx) = unbounded::<AttemptRecord>();

    let mut records = thread::scope(|scope| {
        for _ in 0..workers {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                while let Ok(index) = task_rx.recv() {
                    if result_tx.send(run_one(config, index)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(task_rx);
        drop(result_tx);

        for index in 0..config.attempts {
            if task_tx.send(index).is_err() {
                break;
            }
        }
        drop(task_tx);

        result_rx.iter().collect::<Vec<_>>()
    });

    records.sort_by_key(|r| r.index);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossgrid_grid::layout_hash;

    fn batch(words: &[&str], attempts: u32, workers: usize) -> BatchConfig {
        BatchConfig {
            attempts,
            workers,
            base_seed: 0x5eed,
            ..BatchConfig::new(words.iter().copied())
        }
    }

    fn fingerprint(report: &BatchReport) -> Vec<(u32, u64, Option<u64>)> {
        report
            .records()
            .iter()
            .map(|r| (r.index, r.seed, r.report().map(|a| layout_hash(&a.layout))))
            .collect()
    }

    #[test]
    fn records_are_in_index_order() {
        let report = run_batch(&batch(&["CAT", "CAR", "ART"], 12, 3)).unwrap();
        let indices: Vec<u32> = report.records().iter().map(|r| r.index).collect();
        assert_eq!(indices, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn worker_count_does_not_change_results() {
        let words = ["SACHIN", "SIMBA", "SANTA", "MESSI", "KINDLE", "SWIFT"];
        let one = run_batch(&batch(&words, 16, 1)).unwrap();
        let four = run_batch(&batch(&words, 16, 4)).unwrap();
        assert_eq!(fingerprint(&one), fingerprint(&four));
    }

    #[test]
    fn failures_are_kept() {
        let report = run_batch(&batch(&["CAT", "CAR", "HP"], 5, 2)).unwrap();
        assert_eq!(report.records().len(), 5);
        assert_eq!(report.failure_count(), 5);
        assert!(report.best().is_none());
    }

    #[test]
    fn best_prefers_more_words() {
        let report = run_batch(&batch(&["CAT", "CAR", "ART"], 8, 1)).unwrap();
        let best = report.best().unwrap();
        let placed = best.report().unwrap().layout.placed_count();
        for (_, r) in report.successes() {
            assert!(r.layout.placed_count() <= placed);
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert_eq!(
            run_batch(&batch(&[], 5, 1)).unwrap_err(),
            ConfigError::NoWords
        );
        assert_eq!(
            run_batch(&batch(&["CAT"], 5, 0)).unwrap_err(),
            ConfigError::ZeroWorkers
        );
    }
}
