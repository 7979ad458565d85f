//! Schedule quality metrics.
//!
//! Computes the aggregate figures reported for a single-CPU schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Final CPU clock (end of the last executed process) |
//! | Avg Waiting | Mean of start - arrival |
//! | Avg Turnaround | Mean of end - arrival |
//! | CPU Utilization | total burst / makespan × 100 |
//! | Idle Time | makespan - total burst |
//! | Throughput | processes / makespan |
//!
//! The clock starts at t=0, so idle time before the first arrival counts
//! against utilization.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::ScheduleError;
use crate::models::Decision;

/// Aggregate schedule indicators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Number of scheduled processes.
    pub process_count: usize,
    /// Sum of burst times (CPU busy time).
    pub total_burst_time: i64,
    /// Sum of waiting times.
    pub total_waiting_time: i64,
    /// Sum of turnaround times.
    pub total_turnaround_time: i64,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Largest single waiting time.
    pub max_waiting_time: i64,
    /// Final clock value.
    pub makespan: i64,
    /// Time the CPU sat idle before the makespan.
    pub idle_time: i64,
    /// CPU utilization in percent (0..=100 for well-formed input).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from decisions in execution order.
    ///
    /// An empty slice yields all-zero metrics.
    ///
    /// # Errors
    /// [`ScheduleError::TimeOverflow`] if a total leaves the `i64` range.
    pub fn calculate(decisions: &[Decision]) -> Result<Self, ScheduleError> {
        let Some(last) = decisions.last() else {
            return Ok(Self::default());
        };

        let count = decisions.len();
        let mut total_burst: i64 = 0;
        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut max_waiting: i64 = 0;

        for d in decisions {
            total_burst = checked_sum(total_burst, d.process.burst_time)?;
            total_waiting = checked_sum(total_waiting, d.waiting_time)?;
            total_turnaround = checked_sum(total_turnaround, d.turnaround_time)?;
            max_waiting = max_waiting.max(d.waiting_time);
        }

        let makespan = last.end_time;
        let idle_time = makespan
            .checked_sub(total_burst)
            .ok_or(ScheduleError::TimeOverflow)?;
        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                total_burst as f64 / makespan as f64 * 100.0,
                count as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Ok(Self {
            process_count: count,
            total_burst_time: total_burst,
            total_waiting_time: total_waiting,
            total_turnaround_time: total_turnaround,
            average_waiting_time: total_waiting as f64 / count as f64,
            average_turnaround_time: total_turnaround as f64 / count as f64,
            max_waiting_time: max_waiting,
            makespan,
            idle_time,
            cpu_utilization,
            throughput,
        })
    }
}

fn checked_sum(total: i64, value: i64) -> Result<i64, ScheduleError> {
    total.checked_add(value).ok_or(ScheduleError::TimeOverflow)
}
