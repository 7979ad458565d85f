//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// Shortest Processing Time.
///
/// Prioritizes the process with the shortest CPU burst. Driving the
/// non-preemptive dispatcher with this rule yields SJF.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst_time
    }
}

/// First In, First Out.
///
/// Prioritizes the earliest arrival. Driving the dispatcher with this rule
/// yields FCFS in true arrival order, whatever the batch order.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival_time
    }
}
