//! Non-preemptive single-CPU schedulers and metrics.
//!
//! Every strategy is a pure function from a [`ProcessBatch`] to a
//! [`ScheduleResult`]: no state survives between runs, and the same batch
//! always yields the same result.
//!
//! # Strategies
//!
//! - [`schedule_fcfs`]: First-Come, First-Served in batch order.
//! - [`schedule_fcfs_by_arrival`]: FCFS dispatched by actual arrival time.
//! - [`schedule_sjf`]: Shortest-Job-First, non-preemptive.
//! - [`schedule_by_rule`]: the dispatcher behind the last two, for any
//!   [`DispatchingRule`](crate::dispatching::DispatchingRule).
//!
//! # Metrics
//!
//! [`ScheduleMetrics`] derives waiting/turnaround averages, makespan and CPU
//! utilization from the decisions.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod dispatch;
mod fcfs;
mod metrics;
mod sjf;

pub use dispatch::schedule_by_rule;
pub use fcfs::{schedule_fcfs, schedule_fcfs_by_arrival};
pub use metrics::ScheduleMetrics;
pub use sjf::schedule_sjf;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ProcessBatch, ScheduleResult};
use crate::validation::ValidationError;

/// Errors that end a scheduling run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("no processes to schedule")]
    EmptyBatch,
    #[error("invalid choice: {0:?} (expected FCFS or SJF)")]
    InvalidDiscipline(String),
    #[error("invalid process batch: {}", join_messages(.0))]
    InvalidBatch(Vec<ValidationError>),
    #[error("schedule times exceed the i64 range")]
    TimeOverflow,
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Scheduling discipline selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    /// First-Come, First-Served.
    #[default]
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
}

impl Discipline {
    /// All selectable disciplines, in menu order.
    pub const ALL: [Discipline; 2] = [Discipline::Fcfs, Discipline::Sjf];

    /// Short name (e.g., "FCFS").
    pub fn name(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "FCFS",
            Discipline::Sjf => "SJF",
        }
    }

    /// Full name.
    pub fn description(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "First-Come, First-Served",
            Discipline::Sjf => "Shortest Job First",
        }
    }

    /// 1-based menu number.
    pub fn menu_number(&self) -> u8 {
        match self {
            Discipline::Fcfs => 1,
            Discipline::Sjf => 2,
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Discipline {
    type Err = ScheduleError;

    /// Accepts the menu number or the short name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "fcfs" => Ok(Discipline::Fcfs),
            "2" | "sjf" => Ok(Discipline::Sjf),
            _ => Err(ScheduleError::InvalidDiscipline(s.trim().to_string())),
        }
    }
}

/// Schedules the batch with the selected discipline.
///
/// FCFS uses batch order as given (see [`schedule_fcfs`]).
///
/// # Errors
/// - [`ScheduleError::EmptyBatch`] if the batch has no processes.
/// - [`ScheduleError::TimeOverflow`] if the clock leaves the `i64` range.
pub fn schedule(
    batch: &ProcessBatch,
    discipline: Discipline,
) -> Result<ScheduleResult, ScheduleError> {
    match discipline {
        Discipline::Fcfs => schedule_fcfs(batch),
        Discipline::Sjf => schedule_sjf(batch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    #[test]
    fn test_discipline_from_str() {
        assert_eq!("1".parse::<Discipline>().unwrap(), Discipline::Fcfs);
        assert_eq!("FCFS".parse::<Discipline>().unwrap(), Discipline::Fcfs);
        assert_eq!(" 2 ".parse::<Discipline>().unwrap(), Discipline::Sjf);
        assert_eq!("sjf".parse::<Discipline>().unwrap(), Discipline::Sjf);
    }

    #[test]
    fn test_discipline_invalid_choice() {
        let err = "3".parse::<Discipline>().unwrap_err();
        assert_eq!(err, ScheduleError::InvalidDiscipline("3".into()));
        assert!(err.to_string().starts_with("invalid choice"));
        assert!("rr".parse::<Discipline>().is_err());
        assert!("".parse::<Discipline>().is_err());
    }

    #[test]
    fn test_discipline_names() {
        assert_eq!(Discipline::Fcfs.to_string(), "FCFS");
        assert_eq!(Discipline::Sjf.description(), "Shortest Job First");
        let numbers: Vec<u8> = Discipline::ALL.iter().map(|d| d.menu_number()).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_schedule_dispatches_by_discipline() {
        let batch = ProcessBatch::new(vec![
            Process::new(1).with_arrival(0).with_burst(7),
            Process::new(2).with_arrival(1).with_burst(9),
            Process::new(3).with_arrival(2).with_burst(1),
        ]);
        let fcfs = schedule(&batch, Discipline::Fcfs).unwrap();
        let sjf = schedule(&batch, Discipline::Sjf).unwrap();
        assert_eq!(fcfs.gantt_labels(), vec!["P1", "P2", "P3"]);
        assert_eq!(sjf.gantt_labels(), vec!["P1", "P3", "P2"]);
    }

    #[test]
    fn test_schedule_empty_batch() {
        for discipline in Discipline::ALL {
            assert_eq!(
                schedule(&ProcessBatch::default(), discipline).unwrap_err(),
                ScheduleError::EmptyBatch
            );
        }
    }

    #[test]
    fn test_invalid_batch_message() {
        let errors = ProcessBatch::validated(vec![Process::new(1), Process::new(1).with_burst(2)])
            .unwrap_err();
        let msg = ScheduleError::InvalidBatch(errors).to_string();
        assert!(msg.contains("non-positive burst"));
        assert!(msg.contains("Duplicate process ID: 1"));
    }
}
