//! Uniprocessor scheduling policies and metric derivation.
//!
//! Every policy is a pure transformation from a [`Workload`] to a
//! [`SimulationOutcome`]. Policies clone the workload into a private working
//! set, so one workload can be replayed against any number of policies.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | [`Fcfs`] | no | arrival order (stable) |
//! | [`NonPreemptive::sjf`] | no | shortest burst |
//! | [`NonPreemptive::priority`] | no | lowest priority value |
//! | [`NonPreemptive::hrrn`] | no | highest response ratio |
//! | [`RoundRobin`] | quantum | workload index order |
//! | [`Preemptive::srtf`] | every tick | shortest remaining time |
//!
//! Ties always go to the lowest workload index.
//!
//! # KPI
//!
//! [`MetricResult`] derives CPU utilization and throughput from a run's
//! simulated horizon.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

mod dispatch;
mod fcfs;
mod kpi;
mod outcome;
mod preemptive;
mod round_robin;

pub use dispatch::NonPreemptive;
pub use fcfs::Fcfs;
pub use kpi::{cpu_utilization, throughput, MetricResult};
pub use outcome::{Completion, ExecutionSlice, SimulationOutcome};
pub use preemptive::Preemptive;
pub use round_robin::{Quantum, RoundRobin};

use crate::models::{Process, Ticks, Workload};
use std::fmt::Debug;

/// A uniprocessor scheduling policy.
///
/// Implementations must be deterministic: the same workload always yields
/// the same outcome.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Policy label used in reports (e.g., "FCFS", "Round Robin").
    fn name(&self) -> &str;

    /// Simulates the workload to completion.
    fn simulate(&self, workload: &Workload) -> SimulationOutcome;
}

/// Earliest arrival after `clock` among processes that still need CPU time.
///
/// Used to skip idle stretches in one step; no decision can change before
/// the next arrival.
pub(crate) fn next_arrival(processes: &[Process], clock: Ticks) -> Option<Ticks> {
    processes
        .iter()
        .filter(|p| p.is_runnable() && p.arrival_time > clock)
        .map(|p| p.arrival_time)
        .min()
}

/// Clock value after an idle stretch starting at `clock`.
pub(crate) fn skip_idle(processes: &[Process], clock: Ticks) -> Ticks {
    let next = next_arrival(processes, clock).unwrap_or(clock + 1);
    log::trace!("CPU idle over [{clock}, {next})");
    next
}
