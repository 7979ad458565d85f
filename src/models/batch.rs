//! Process batch model.
//!
//! The batch is the ordered input of one scheduling run, in the order the
//! loader supplied it. Arrival order is not guaranteed.

use serde::{Deserialize, Serialize};

use super::Process;
use crate::validation::{validate_processes, ValidationError};

/// An ordered batch of processes.
///
/// Unbounded: any number of processes may be submitted. An empty batch is
/// a valid value but cannot be scheduled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessBatch {
    processes: Vec<Process>,
}

impl ProcessBatch {
    /// Creates a batch without validating it.
    pub fn new(processes: Vec<Process>) -> Self {
        Self { processes }
    }

    /// Creates a batch, rejecting degenerate processes.
    ///
    /// # Returns
    /// `Err(errors)` listing every problem found (see [`validate_processes`]).
    pub fn validated(processes: Vec<Process>) -> Result<Self, Vec<ValidationError>> {
        validate_processes(&processes)?;
        Ok(Self { processes })
    }

    /// Appends a process.
    pub fn push(&mut self, process: Process) {
        self.processes.push(process);
    }

    /// Processes in batch order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Iterates processes in batch order.
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the batch has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Sum of all burst times, or `None` if it leaves the `i64` range.
    pub fn total_burst_time(&self) -> Option<i64> {
        self.processes
            .iter()
            .try_fold(0i64, |acc, p| acc.checked_add(p.burst_time))
    }

    /// Whether batch order is non-decreasing in arrival time.
    pub fn is_sorted_by_arrival(&self) -> bool {
        self.processes
            .windows(2)
            .all(|w| w[0].arrival_time <= w[1].arrival_time)
    }

    /// Returns a copy ordered by arrival time.
    ///
    /// The sort is stable: processes arriving together keep batch order.
    pub fn sorted_by_arrival(&self) -> Self {
        let mut processes = self.processes.clone();
        processes.sort_by_key(|p| p.arrival_time);
        Self { processes }
    }
}

impl From<Vec<Process>> for ProcessBatch {
    fn from(processes: Vec<Process>) -> Self {
        Self::new(processes)
    }
}

impl FromIterator<Process> for ProcessBatch {
    fn from_iter<I: IntoIterator<Item = Process>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ProcessBatch {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}
