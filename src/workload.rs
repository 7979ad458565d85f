//! Seeded random workload generation.
//!
//! Builds process batches for demos and property tests. The same spec and
//! seed always produce the same batch.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessBatch};

/// Shape of a random workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub processes: usize,
    /// Largest gap between consecutive arrivals (0 = all arrive at t=0).
    pub max_interarrival: i64,
    /// Shortest burst (clamped to at least 1).
    pub min_burst: i64,
    /// Longest burst.
    pub max_burst: i64,
    /// Priorities are drawn from `0..=max_priority`.
    pub max_priority: i32,
    /// Shuffle the batch so it is no longer in arrival order.
    pub shuffle: bool,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            processes: 10,
            max_interarrival: 4,
            min_burst: 1,
            max_burst: 10,
            max_priority: 4,
            shuffle: false,
        }
    }
}

impl WorkloadSpec {
    /// Default shape with `processes` processes.
    pub fn new(processes: usize) -> Self {
        Self {
            processes,
            ..Default::default()
        }
    }

    /// Sets the burst range.
    pub fn with_bursts(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the largest arrival gap.
    pub fn with_max_interarrival(mut self, max_interarrival: i64) -> Self {
        self.max_interarrival = max_interarrival;
        self
    }

    /// Sets whether batch order is shuffled.
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Generates a batch with process ids `1..=processes`.
    ///
    /// Without shuffling the batch is sorted by arrival time.
    pub fn generate(&self, seed: u64) -> ProcessBatch {
        let mut rng = StdRng::seed_from_u64(seed);
        let min_burst = self.min_burst.max(1);
        let max_burst = self.max_burst.max(min_burst);
        let max_gap = self.max_interarrival.max(0);
        let max_priority = self.max_priority.max(0);

        let mut arrival: i64 = 0;
        let mut processes = Vec::with_capacity(self.processes);
        for i in 0..self.processes {
            if i > 0 {
                arrival = arrival.saturating_add(rng.random_range(0..=max_gap));
            }
            processes.push(
                Process::new(i as u32 + 1)
                    .with_arrival(arrival)
                    .with_burst(rng.random_range(min_burst..=max_burst))
                    .with_priority(rng.random_range(0..=max_priority)),
            );
        }

        if self.shuffle {
            processes.shuffle(&mut rng);
        }

        ProcessBatch::new(processes)
    }
}
