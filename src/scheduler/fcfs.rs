//! First-Come, First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Walk the batch in the order given.
//! 2. If the CPU is free before the next process arrives, advance the clock
//!    to its arrival (idle time).
//! 3. Run the process to completion and advance the clock by its burst.
//!
//! Batch order is taken as arrival order and is not re-sorted; an unsorted
//! batch gives a deterministic schedule in batch order. Use
//! [`schedule_fcfs_by_arrival`] to dispatch by actual arrival time.
//!
//! # Complexity
//! O(n).

use tracing::{debug, trace, warn};

use super::dispatch::schedule_by_rule;
use super::{Discipline, ScheduleError};
use crate::dispatching::rules::Fifo;
use crate::models::{Decision, ProcessBatch, ScheduleResult};

/// Schedules the batch first-come, first-served, in batch order.
///
/// # Errors
/// - [`ScheduleError::EmptyBatch`] if the batch has no processes.
/// - [`ScheduleError::TimeOverflow`] if the clock leaves the `i64` range.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::{Process, ProcessBatch};
/// use cpu_schedule::scheduler::schedule_fcfs;
///
/// let batch = ProcessBatch::new(vec![
///     Process::new(1).with_arrival(0).with_burst(5),
///     Process::new(2).with_arrival(1).with_burst(3),
/// ]);
/// let result = schedule_fcfs(&batch).unwrap();
/// assert_eq!(result.timeline(), vec![0, 5, 8]);
/// ```
pub fn schedule_fcfs(batch: &ProcessBatch) -> Result<ScheduleResult, ScheduleError> {
    if batch.is_empty() {
        return Err(ScheduleError::EmptyBatch);
    }
    if !batch.is_sorted_by_arrival() {
        warn!(
            processes = batch.len(),
            "FCFS batch is not sorted by arrival time; using batch order"
        );
    }

    let mut clock: i64 = 0;
    let mut decisions = Vec::with_capacity(batch.len());

    for (idx, process) in batch.iter().enumerate() {
        if clock < process.arrival_time {
            trace!(from = clock, to = process.arrival_time, "CPU idle");
            clock = process.arrival_time;
        }

        let decision = Decision::try_new(process, idx, clock)?;
        debug!(
            pid = process.id,
            start = decision.start_time,
            end = decision.end_time,
            waiting = decision.waiting_time,
            "FCFS dispatch"
        );
        clock = decision.end_time;
        decisions.push(decision);
    }

    ScheduleResult::new(Discipline::Fcfs, decisions)
}

/// Schedules the batch first-come, first-served by arrival time.
///
/// Equivalent to [`schedule_fcfs`] on the batch stably sorted by arrival,
/// but decisions keep their original batch indices.
///
/// # Errors
/// Same as [`schedule_fcfs`].
pub fn schedule_fcfs_by_arrival(batch: &ProcessBatch) -> Result<ScheduleResult, ScheduleError> {
    schedule_by_rule(batch, &Fifo, Discipline::Fcfs)
}
