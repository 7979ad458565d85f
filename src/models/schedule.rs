//! Schedule (solution) model.
//!
//! A schedule result is the outcome of one scheduling run: one decision per
//! process in execution order, plus aggregate metrics.

use serde::{Deserialize, Serialize};

use super::Process;
use crate::scheduler::{Discipline, ScheduleError, ScheduleMetrics};

/// When a single process ran on the CPU.
///
/// Invariants: `end_time - start_time == burst_time` and
/// `turnaround_time == waiting_time + burst_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// The scheduled process.
    pub process: Process,
    /// Position of the process in the input batch.
    pub batch_index: usize,
    /// Instant the process was dispatched.
    pub start_time: i64,
    /// Instant the process completed.
    pub end_time: i64,
    /// Time spent ready but not running: start - arrival.
    pub waiting_time: i64,
    /// Time from arrival to completion: end - arrival.
    pub turnaround_time: i64,
}

impl Decision {
    /// Records `process` running from `start_time` to completion.
    ///
    /// # Errors
    /// [`ScheduleError::TimeOverflow`] if a derived time leaves the `i64` range.
    pub fn try_new(
        process: &Process,
        batch_index: usize,
        start_time: i64,
    ) -> Result<Self, ScheduleError> {
        let end_time = start_time
            .checked_add(process.burst_time)
            .ok_or(ScheduleError::TimeOverflow)?;
        let waiting_time = start_time
            .checked_sub(process.arrival_time)
            .ok_or(ScheduleError::TimeOverflow)?;
        let turnaround_time = end_time
            .checked_sub(process.arrival_time)
            .ok_or(ScheduleError::TimeOverflow)?;
        Ok(Self {
            process: process.clone(),
            batch_index,
            start_time,
            end_time,
            waiting_time,
            turnaround_time,
        })
    }

    /// Time on the CPU (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

/// Result of scheduling a batch with one discipline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Discipline that produced this result.
    pub discipline: Discipline,
    /// Decisions in execution order.
    pub decisions: Vec<Decision>,
    /// Aggregate metrics derived from `decisions`.
    pub metrics: ScheduleMetrics,
}

impl ScheduleResult {
    /// Builds a result and derives its metrics.
    ///
    /// # Errors
    /// [`ScheduleError::TimeOverflow`] if a metric total leaves the `i64` range.
    pub fn new(discipline: Discipline, decisions: Vec<Decision>) -> Result<Self, ScheduleError> {
        let metrics = ScheduleMetrics::calculate(&decisions)?;
        Ok(Self {
            discipline,
            decisions,
            metrics,
        })
    }

    /// Number of decisions.
    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// Gantt chart labels in execution order.
    pub fn gantt_labels(&self) -> Vec<String> {
        self.decisions.iter().map(|d| d.process.label()).collect()
    }

    /// Gantt timeline: the first executed start, then each end time.
    ///
    /// The origin is the start of the first dispatched process, which is
    /// not necessarily the earliest arrival.
    pub fn timeline(&self) -> Vec<i64> {
        let Some(first) = self.decisions.first() else {
            return Vec::new();
        };
        std::iter::once(first.start_time)
            .chain(self.decisions.iter().map(|d| d.end_time))
            .collect()
    }

    /// Batch indices in execution order.
    pub fn execution_order(&self) -> Vec<usize> {
        self.decisions.iter().map(|d| d.batch_index).collect()
    }

    /// First decision for the given process id.
    pub fn decision_for(&self, id: u32) -> Option<&Decision> {
        self.decisions.iter().find(|d| d.process.id == id)
    }
}
