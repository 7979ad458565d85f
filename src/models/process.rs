//! Process model.
//!
//! A process is a unit of CPU work submitted to the scheduler: it becomes
//! schedulable at its arrival time and needs a fixed amount of CPU service.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Immutable once built. The scheduler never mutates a process; it copies
/// it into the [`Decision`](super::Decision) that records when it ran.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0),
/// which is also where the CPU clock starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier. Uniqueness is checked by validation only.
    pub id: u32,
    /// Instant the process becomes schedulable (expected >= 0).
    pub arrival_time: i64,
    /// Required CPU service time (expected > 0).
    pub burst_time: i64,
    /// Accepted for input compatibility; no strategy reads it.
    pub priority: i32,
}

impl Process {
    /// Creates a process arriving at t=0 with zero burst and priority.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            arrival_time: 0,
            burst_time: 0,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the CPU burst time.
    pub fn with_burst(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Gantt chart label (`P<id>`).
    pub fn label(&self) -> String {
        format!("P{}", self.id)
    }
}
