//! Non-preemptive CPU scheduling simulator.
//!
//! Schedules a static batch of processes on a single CPU and reports the
//! execution timeline, per-process waiting/turnaround times, and aggregate
//! statistics (average wait, average turnaround, CPU utilization).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessBatch`, `Decision`,
//!   `ScheduleResult`
//! - **`scheduler`**: FCFS and non-preemptive SJF strategies, `Discipline`
//!   selector, `ScheduleMetrics`
//! - **`dispatching`**: Dispatching rules (SPT, FIFO) scored at each dispatch
//! - **`validation`**: Batch precondition checks (burst, arrival, duplicate IDs)
//! - **`config`**: Run options applied around the engine
//! - **`loader`** / **`report`**: Process table input and console-style output
//! - **`workload`**: Seeded random batches
//!
//! # Example
//!
//! ```
//! use cpu_schedule::loader::parse_batch;
//! use cpu_schedule::scheduler::{schedule, Discipline};
//!
//! let batch = parse_batch("PID Arrival Burst Priority\n1 0 5 0\n2 1 3 0\n3 2 8 0\n").unwrap();
//! let result = schedule(&batch, Discipline::Sjf).unwrap();
//! assert_eq!(result.metrics.makespan, 16);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod dispatching;
pub mod loader;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;
