//! Run configuration.
//!
//! Bundles the choices made outside the engine (which discipline, whether to
//! trust batch order, whether to validate) and applies them to a batch.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{ProcessBatch, ScheduleResult};
use crate::scheduler::{schedule, schedule_fcfs_by_arrival, Discipline, ScheduleError};
use crate::validation::validate_batch;

/// Options for one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Discipline to schedule with.
    pub discipline: Discipline,
    /// Dispatch FCFS by arrival time instead of batch order.
    /// SJF is unaffected.
    pub sort_by_arrival: bool,
    /// Reject degenerate processes before scheduling.
    pub validate: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            discipline: Discipline::Fcfs,
            sort_by_arrival: false,
            validate: true,
        }
    }
}

impl SchedulerConfig {
    /// Creates the default configuration for a discipline.
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            ..Default::default()
        }
    }

    /// Sets whether FCFS dispatches by arrival time.
    pub fn with_sort_by_arrival(mut self, sort_by_arrival: bool) -> Self {
        self.sort_by_arrival = sort_by_arrival;
        self
    }

    /// Sets whether the batch is validated first.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Schedules `batch` under this configuration.
    ///
    /// # Errors
    /// - [`ScheduleError::EmptyBatch`] for an empty batch.
    /// - [`ScheduleError::InvalidBatch`] when validation is on and fails.
    /// - [`ScheduleError::TimeOverflow`] if the clock leaves the `i64` range.
    pub fn run(&self, batch: &ProcessBatch) -> Result<ScheduleResult, ScheduleError> {
        if batch.is_empty() {
            return Err(ScheduleError::EmptyBatch);
        }
        if self.validate {
            validate_batch(batch).map_err(ScheduleError::InvalidBatch)?;
        }

        info!(
            discipline = %self.discipline,
            processes = batch.len(),
            total_burst = ?batch.total_burst_time(),
            sort_by_arrival = self.sort_by_arrival,
            "scheduling batch"
        );

        match self.discipline {
            Discipline::Fcfs if self.sort_by_arrival => schedule_fcfs_by_arrival(batch),
            discipline => schedule(batch, discipline),
        }
    }
}
