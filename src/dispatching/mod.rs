//! Dispatching rules for the non-preemptive dispatcher.
//!
//! When the CPU becomes free, the dispatcher asks a rule to score every
//! ready process and runs the one with the lowest score.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{rules, select_best};
//! use cpu_schedule::models::Process;
//!
//! let processes = vec![
//!     Process::new(1).with_burst(8),
//!     Process::new(2).with_burst(3),
//! ];
//! assert_eq!(select_best(&rules::Spt, &processes, [0, 1]), Some(1));
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

pub mod rules;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (scheduled first). Integer so that equal
/// bursts compare exactly equal.
pub type RuleScore = i64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should be dispatched first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a ready process.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &Process) -> RuleScore;
}

/// Returns the candidate index with the lowest score.
///
/// Ties go to the candidate yielded first, so passing candidates in batch
/// order gives a stable, index-order tie-break.
pub fn select_best<R, I>(
    rule: &R,
    processes: &[Process],
    candidates: I,
) -> Option<usize>
where
    R: DispatchingRule + ?Sized,
    I: IntoIterator<Item = usize>,
{
    let mut best: Option<(usize, RuleScore)> = None;
    for idx in candidates {
        let score = rule.evaluate(&processes[idx]);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}
