//! Rule-driven non-preemptive dispatcher.
//!
//! # Algorithm
//!
//! 1. Start the CPU clock at t=0.
//! 2. Among unscheduled processes with `arrival_time <= clock`, pick the one
//!    with the lowest rule score; ties go to the earliest batch index.
//! 3. If none is ready, jump the clock to the earliest pending arrival.
//! 4. Otherwise run the pick to completion. A process that arrives during
//!    that run never preempts it.
//!
//! Jumping over idle time gives the same schedule as stepping the clock one
//! tick at a time, since arrivals are integral.
//!
//! # Complexity
//! O(n²): one ready-set scan per dispatch.

use tracing::{debug, trace};

use super::{Discipline, ScheduleError};
use crate::dispatching::{select_best, DispatchingRule};
use crate::models::{Decision, ProcessBatch, ScheduleResult};

/// Schedules the batch non-preemptively, dispatching by `rule`.
///
/// `discipline` labels the result.
///
/// # Errors
/// - [`ScheduleError::EmptyBatch`] if the batch has no processes.
/// - [`ScheduleError::TimeOverflow`] if the clock leaves the `i64` range.
pub fn schedule_by_rule<R>(
    batch: &ProcessBatch,
    rule: &R,
    discipline: Discipline,
) -> Result<ScheduleResult, ScheduleError>
where
    R: DispatchingRule + ?Sized,
{
    if batch.is_empty() {
        return Err(ScheduleError::EmptyBatch);
    }

    let processes = batch.processes();
    let n = processes.len();
    let mut scheduled = vec![false; n];
    let mut clock: i64 = 0;
    let mut decisions = Vec::with_capacity(n);

    while decisions.len() < n {
        let ready = (0..n).filter(|&i| !scheduled[i] && processes[i].arrival_time <= clock);

        let Some(idx) = select_best(rule, processes, ready) else {
            let Some(next_arrival) = (0..n)
                .filter(|&i| !scheduled[i])
                .map(|i| processes[i].arrival_time)
                .min()
            else {
                break;
            };
            trace!(from = clock, to = next_arrival, "CPU idle");
            clock = next_arrival;
            continue;
        };

        let process = &processes[idx];
        let decision = Decision::try_new(process, idx, clock)?;
        debug!(
            rule = rule.name(),
            pid = process.id,
            start = decision.start_time,
            end = decision.end_time,
            waiting = decision.waiting_time,
            "dispatch"
        );
        clock = decision.end_time;
        scheduled[idx] = true;
        decisions.push(decision);
    }

    ScheduleResult::new(discipline, decisions)
}
