//! Validated workload model.
//!
//! A workload is the ordered, non-empty collection of processes handed to a
//! policy for one simulation run. Order matters: it is the tie-break order
//! used by every dynamic-selection policy.

use serde::{Deserialize, Serialize};

use super::{Process, Ticks};
use crate::validation::{validate_workload, InvalidWorkload};

/// An ordered, validated set of processes.
///
/// Construction guarantees at least one process, unique ids, non-negative
/// arrivals and positive bursts, so every policy terminates with a positive
/// simulated horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Process>", into = "Vec<Process>")]
pub struct Workload {
    processes: Vec<Process>,
}

impl Workload {
    /// Validates and wraps the given processes.
    ///
    /// Scratch state is reset, so `remaining_time` equals `burst_time` for
    /// every stored process.
    pub fn new(processes: Vec<Process>) -> Result<Self, InvalidWorkload> {
        validate_workload(&processes).map_err(InvalidWorkload::new)?;
        Ok(Self {
            processes: processes.iter().map(Process::fresh).collect(),
        })
    }

    /// The processes, in workload order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Iterates processes in workload order.
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    /// Number of processes (always ≥ 1).
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Sum of burst times.
    pub fn total_burst_time(&self) -> Ticks {
        self.processes.iter().map(|p| p.burst_time).sum()
    }

    /// Mean burst time.
    pub fn average_burst_time(&self) -> f64 {
        self.total_burst_time() as f64 / self.len() as f64
    }

    /// Earliest arrival tick.
    pub fn first_arrival(&self) -> Ticks {
        self.processes
            .iter()
            .map(|p| p.arrival_time)
            .min()
            .unwrap_or(0)
    }

    /// Private copy for one simulation run.
    ///
    /// Policies mutate the copy's scratch state; the workload itself is
    /// never touched.
    pub fn working_copy(&self) -> Vec<Process> {
        self.processes.iter().map(Process::fresh).collect()
    }
}

impl TryFrom<Vec<Process>> for Workload {
    type Error = InvalidWorkload;

    fn try_from(processes: Vec<Process>) -> Result<Self, Self::Error> {
        Self::new(processes)
    }
}

impl From<Workload> for Vec<Process> {
    fn from(workload: Workload) -> Self {
        workload.processes
    }
}

impl<'a> IntoIterator for &'a Workload {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}
