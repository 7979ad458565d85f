//! Text rendering of schedule results.
//!
//! Produces the classic console layout: a Gantt chart row, the timeline
//! under it, a per-process table, then the averages and CPU utilization
//! with two decimals.

use crate::models::ScheduleResult;
use crate::scheduler::Discipline;

/// Message shown when there is nothing to schedule.
pub const EMPTY_BATCH_MESSAGE: &str = "No processes to schedule.";

/// Renders a schedule result.
///
/// Table rows follow execution order.
pub fn render(result: &ScheduleResult) -> String {
    let mut out = String::from("Gantt Chart:\n| ");
    for label in result.gantt_labels() {
        out.push_str(&format!("{label} | "));
    }
    out.push('\n');
    for t in result.timeline() {
        out.push_str(&format!("{t}  "));
    }
    out.push_str("\n\nProcess\tWT\tTAT\n");

    for d in &result.decisions {
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            d.process.label(),
            d.waiting_time,
            d.turnaround_time
        ));
    }

    let m = &result.metrics;
    out.push_str(&format!(
        "\nAverage WT: {:.2}\nAverage TAT: {:.2}\nCPU Utilization: {:.2}%\n",
        m.average_waiting_time, m.average_turnaround_time, m.cpu_utilization
    ));
    out
}

/// Renders the empty-batch notice.
pub fn render_empty() -> String {
    format!("{EMPTY_BATCH_MESSAGE}\n")
}

/// Renders the discipline menu.
pub fn render_menu() -> String {
    let options: String = Discipline::ALL
        .iter()
        .map(|d| format!("{}. {} ({})\n", d.menu_number(), d.description(), d.name()))
        .collect();
    format!("Choose Scheduling Algorithm:\n{options}Enter choice: ")
}
