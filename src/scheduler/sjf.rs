//! Shortest-Job-First scheduling (non-preemptive).
//!
//! Whenever the CPU becomes free, the ready process with the shortest burst
//! runs to completion. Equal bursts go to the process listed first in the
//! batch.

use super::dispatch::schedule_by_rule;
use super::{Discipline, ScheduleError};
use crate::dispatching::rules::Spt;
use crate::models::{ProcessBatch, ScheduleResult};

/// Schedules the batch shortest-job-first, without preemption.
///
/// # Errors
/// - [`ScheduleError::EmptyBatch`] if the batch has no processes.
/// - [`ScheduleError::TimeOverflow`] if the clock leaves the `i64` range.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::{Process, ProcessBatch};
/// use cpu_schedule::scheduler::schedule_sjf;
///
/// let batch = ProcessBatch::new(vec![
///     Process::new(1).with_arrival(0).with_burst(6),
///     Process::new(2).with_arrival(1).with_burst(8),
///     Process::new(3).with_arrival(2).with_burst(2),
/// ]);
/// let result = schedule_sjf(&batch).unwrap();
/// assert_eq!(result.gantt_labels(), vec!["P1", "P3", "P2"]);
/// ```
pub fn schedule_sjf(batch: &ProcessBatch) -> Result<ScheduleResult, ScheduleError> {
    schedule_by_rule(batch, &Spt, Discipline::Sjf)
}
