//! Policy performance metrics (KPIs).
//!
//! Derives the comparison row for one policy run from its outcome and the
//! workload it consumed.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | Mean of (turnaround - burst) |
//! | Avg Turnaround Time | Mean of (completion - arrival) |
//! | CPU Utilization | Total burst / simulated horizon × 100 |
//! | Throughput | Process count / simulated horizon |

use serde::{Deserialize, Serialize};

use super::SimulationOutcome;
use crate::models::{Ticks, Workload};

/// One policy's comparison row.
///
/// Time values are in ticks; throughput is processes per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    /// Policy label.
    pub name: String,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// CPU busy share of the horizon (percent).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Simulated horizon the row was derived from.
    pub total_time: Ticks,
}

impl MetricResult {
    /// Computes the row for `outcome`, produced by running `workload`.
    ///
    /// # Arguments
    /// * `name` - Policy label.
    /// * `outcome` - The completed simulation.
    /// * `workload` - The workload as given to the policy (for burst totals).
    pub fn calculate(
        name: impl Into<String>,
        outcome: &SimulationOutcome,
        workload: &Workload,
    ) -> Self {
        Self {
            name: name.into(),
            avg_waiting_time: outcome.avg_waiting_time,
            avg_turnaround_time: outcome.avg_turnaround_time,
            cpu_utilization: cpu_utilization(workload.total_burst_time(), outcome.total_time),
            throughput: throughput(workload.len(), outcome.total_time),
            total_time: outcome.total_time,
        }
    }
}

/// `total_burst / total_time × 100`; 0 for an empty horizon.
pub fn cpu_utilization(total_burst: Ticks, total_time: Ticks) -> f64 {
    if total_time <= 0 {
        return 0.0;
    }
    total_burst as f64 / total_time as f64 * 100.0
}

/// `process_count / total_time`; 0 for an empty horizon.
pub fn throughput(process_count: usize, total_time: Ticks) -> f64 {
    if total_time <= 0 {
        return 0.0;
    }
    process_count as f64 / total_time as f64
}
