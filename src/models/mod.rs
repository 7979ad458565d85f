//! CPU scheduling domain models.
//!
//! Provides the input and output types of a scheduling run.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | One job: arrival, burst, priority |
//! | `ProcessBatch` | Ordered input of a run |
//! | `Decision` | When one process ran, with its wait/turnaround |
//! | `ScheduleResult` | Decisions in execution order + metrics |

mod batch;
mod process;
mod schedule;

pub use batch::ProcessBatch;
pub use process::Process;
pub use schedule::{Decision, ScheduleResult};
