//! Property tests for the scheduling engine.
//!
//! Batches are drawn from small arrival/burst domains so that ties, idle
//! gaps and late short jobs all occur often.

use cpu_schedule::loader::parse_batch;
use cpu_schedule::models::{Process, ProcessBatch, ScheduleResult};
use cpu_schedule::report::render;
use cpu_schedule::scheduler::{
    schedule, schedule_fcfs, schedule_fcfs_by_arrival, schedule_sjf, Discipline, ScheduleError,
};
use cpu_schedule::validation::validate_processes;
use cpu_schedule::workload::WorkloadSpec;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn batch_strategy() -> impl Strategy<Value = ProcessBatch> {
    prop::collection::vec((0i64..40, 1i64..12, 0i32..5), 1..25).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                Process::new(i as u32 + 1)
                    .with_arrival(arrival)
                    .with_burst(burst)
                    .with_priority(priority)
            })
            .collect()
    })
}

// =============================================================================
// Helpers
// =============================================================================

fn assert_decision_identities(result: &ScheduleResult) {
    for d in &result.decisions {
        assert_eq!(d.end_time - d.start_time, d.process.burst_time);
        assert_eq!(d.waiting_time, d.start_time - d.process.arrival_time);
        assert_eq!(d.turnaround_time, d.end_time - d.process.arrival_time);
        assert_eq!(d.turnaround_time, d.waiting_time + d.process.burst_time);
        assert!(d.waiting_time >= 0);
    }
}

fn assert_single_cpu_feasible(result: &ScheduleResult) {
    for w in result.decisions.windows(2) {
        assert!(w[1].start_time >= w[0].end_time, "overlapping decisions");
    }
}

fn assert_metrics_consistent(result: &ScheduleResult) {
    let m = &result.metrics;
    let n = result.decisions.len() as f64;
    let mean_wt = result.decisions.iter().map(|d| d.waiting_time).sum::<i64>() as f64 / n;
    let mean_tat = result.decisions.iter().map(|d| d.turnaround_time).sum::<i64>() as f64 / n;

    assert!((m.average_waiting_time - mean_wt).abs() < 1e-9);
    assert!((m.average_turnaround_time - mean_tat).abs() < 1e-9);
    assert!(m.cpu_utilization > 0.0 && m.cpu_utilization <= 100.0);
    assert_eq!(m.cpu_utilization == 100.0, m.idle_time == 0);
    assert_eq!(m.makespan, result.decisions.last().map(|d| d.end_time).unwrap_or(0));
}

fn is_permutation(order: &[usize], n: usize) -> bool {
    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    sorted == (0..n).collect::<Vec<_>>()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_fcfs_preserves_batch_order(batch in batch_strategy()) {
        let result = schedule_fcfs(&batch).unwrap();
        prop_assert_eq!(result.execution_order(), (0..batch.len()).collect::<Vec<_>>());
        assert_decision_identities(&result);
        assert_single_cpu_feasible(&result);
        assert_metrics_consistent(&result);
    }

    #[test]
    fn prop_sjf_is_feasible_permutation(batch in batch_strategy()) {
        let result = schedule_sjf(&batch).unwrap();
        prop_assert!(is_permutation(&result.execution_order(), batch.len()));
        assert_decision_identities(&result);
        assert_single_cpu_feasible(&result);
        assert_metrics_consistent(&result);
    }

    #[test]
    fn prop_sjf_picks_shortest_ready_job(batch in batch_strategy()) {
        let result = schedule_sjf(&batch).unwrap();
        let processes = batch.processes();
        let mut done = vec![false; processes.len()];

        for d in &result.decisions {
            let expected = (0..processes.len())
                .filter(|&i| !done[i] && processes[i].arrival_time <= d.start_time)
                .min_by_key(|&i| (processes[i].burst_time, i));
            prop_assert_eq!(expected, Some(d.batch_index));
            done[d.batch_index] = true;
        }
    }

    #[test]
    fn prop_sjf_never_idles_with_ready_work(batch in batch_strategy()) {
        let result = schedule_sjf(&batch).unwrap();
        let mut prev_end = 0;
        for d in &result.decisions {
            // A gap before a dispatch means that process had not yet arrived
            if d.start_time > prev_end {
                prop_assert_eq!(d.start_time, d.process.arrival_time);
            }
            prev_end = d.end_time;
        }
    }

    #[test]
    fn prop_fcfs_by_arrival_matches_sorted_batch(batch in batch_strategy()) {
        let by_arrival = schedule_fcfs_by_arrival(&batch).unwrap();
        let sorted = schedule_fcfs(&batch.sorted_by_arrival()).unwrap();
        prop_assert_eq!(by_arrival.gantt_labels(), sorted.gantt_labels());
        prop_assert_eq!(by_arrival.timeline(), sorted.timeline());
        prop_assert_eq!(&by_arrival.metrics, &sorted.metrics);
    }

    #[test]
    fn prop_scheduling_is_idempotent(batch in batch_strategy()) {
        for discipline in Discipline::ALL {
            let first = schedule(&batch, discipline).unwrap();
            let second = schedule(&batch, discipline).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(render(&first), render(&second));
        }
    }

    #[test]
    fn prop_sjf_mean_wait_not_worse_when_all_arrive_together(
        bursts in prop::collection::vec(1i64..20, 1..20)
    ) {
        let batch: ProcessBatch = bursts
            .iter()
            .enumerate()
            .map(|(i, &b)| Process::new(i as u32).with_burst(b))
            .collect();
        let fcfs = schedule_fcfs(&batch).unwrap();
        let sjf = schedule_sjf(&batch).unwrap();
        prop_assert!(sjf.metrics.average_waiting_time <= fcfs.metrics.average_waiting_time + 1e-9);
    }

    #[test]
    fn prop_generated_workloads_schedule(count in 1usize..60, seed in any::<u64>(), shuffle in any::<bool>()) {
        let batch = WorkloadSpec::new(count).with_shuffle(shuffle).generate(seed);
        prop_assert!(validate_processes(batch.processes()).is_ok());
        for discipline in Discipline::ALL {
            let result = schedule(&batch, discipline).unwrap();
            prop_assert_eq!(result.len(), count);
            assert_metrics_consistent(&result);
        }
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_empty_batch_is_explicit() {
    let batch = parse_batch("PID Arrival Burst Priority\n").unwrap();
    for discipline in Discipline::ALL {
        assert_eq!(
            schedule(&batch, discipline).unwrap_err(),
            ScheduleError::EmptyBatch
        );
    }
}

#[test]
fn test_end_to_end_table() {
    let batch = parse_batch(
        "PID Arrival Burst Priority\n\
         1 0 7 3\n\
         2 2 4 1\n\
         3 3 6 2\n\
         4 5 1 4\n",
    )
    .unwrap();

    let text = render(&schedule_sjf(&batch).unwrap());
    assert!(text.starts_with("Gantt Chart:\n| P1 | P4 | P2 | P3 | \n0  7  8  12  18  \n"));
    assert!(text.contains("Average WT: 4.25\n"));
    assert!(text.contains("Average TAT: 8.75\n"));
    assert!(text.contains("CPU Utilization: 100.00%\n"));
}
