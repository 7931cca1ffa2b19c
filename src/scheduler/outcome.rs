//! Simulation outcome model.
//!
//! A run produces per-process completions and the CPU timeline, from which
//! the aggregate averages are derived.

use serde::{Deserialize, Serialize};

use crate::models::{Process, Ticks};

/// Result of one policy run over one workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Mean waiting time across all processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time across all processes.
    pub avg_turnaround_time: f64,
    /// Tick at which the last process completed.
    pub total_time: Ticks,
    /// Per-process results, in completion order.
    pub completions: Vec<Completion>,
    /// CPU occupancy, in time order. Idle gaps are absent.
    pub timeline: Vec<ExecutionSlice>,
}

/// Completion record for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Index of the process in its workload.
    pub index: usize,
    /// Process ID.
    pub process_id: String,
    /// Arrival tick.
    pub arrival_time: Ticks,
    /// Burst length.
    pub burst_time: Ticks,
    /// Tick at which the process was first dispatched.
    pub start_time: Ticks,
    /// Tick at which the process finished.
    pub completion_time: Ticks,
}

/// A half-open interval `[start, end)` during which one process held the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Index of the process in its workload.
    pub index: usize,
    /// Process ID.
    pub process_id: String,
    /// First tick of the slice.
    pub start: Ticks,
    /// First tick after the slice.
    pub end: Ticks,
}

impl Completion {
    /// completion − arrival.
    #[inline]
    pub fn turnaround_time(&self) -> Ticks {
        self.completion_time - self.arrival_time
    }

    /// turnaround − burst.
    #[inline]
    pub fn waiting_time(&self) -> Ticks {
        self.turnaround_time() - self.burst_time
    }

    /// first dispatch − arrival.
    #[inline]
    pub fn response_time(&self) -> Ticks {
        self.start_time - self.arrival_time
    }
}

impl ExecutionSlice {
    /// Slice length in ticks.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

impl SimulationOutcome {
    /// Completion record for the given process ID.
    pub fn completion(&self, process_id: &str) -> Option<&Completion> {
        self.completions.iter().find(|c| c.process_id == process_id)
    }

    /// Ticks the CPU spent executing processes.
    pub fn busy_time(&self) -> Ticks {
        self.timeline.iter().map(ExecutionSlice::duration).sum()
    }

    /// Ticks the CPU spent with nothing to run.
    pub fn idle_time(&self) -> Ticks {
        self.total_time - self.busy_time()
    }

    /// Mean time from arrival to first dispatch.
    pub fn avg_response_time(&self) -> f64 {
        if self.completions.is_empty() {
            return 0.0;
        }
        let total: i128 = self
            .completions
            .iter()
            .map(|c| i128::from(c.response_time()))
            .sum();
        total as f64 / self.completions.len() as f64
    }

    /// Longest single waiting time.
    pub fn max_waiting_time(&self) -> Ticks {
        self.completions
            .iter()
            .map(Completion::waiting_time)
            .max()
            .unwrap_or(0)
    }

    /// Dispatch sequence as process IDs, one entry per slice.
    pub fn dispatch_order(&self) -> Vec<&str> {
        self.timeline.iter().map(|s| s.process_id.as_str()).collect()
    }
}

/// Accumulates slices and completions while a policy runs.
#[derive(Debug)]
pub(crate) struct OutcomeRecorder {
    first_start: Vec<Option<Ticks>>,
    completions: Vec<Completion>,
    timeline: Vec<ExecutionSlice>,
}

impl OutcomeRecorder {
    pub(crate) fn new(process_count: usize) -> Self {
        Self {
            first_start: vec![None; process_count],
            completions: Vec::with_capacity(process_count),
            timeline: Vec::new(),
        }
    }

    /// Records that `process` ran over `[start, end)`.
    pub(crate) fn run(&mut self, index: usize, process: &Process, start: Ticks, end: Ticks) {
        if end <= start {
            return;
        }
        self.first_start[index].get_or_insert(start);

        // Merge back-to-back service of the same process.
        if let Some(last) = self.timeline.last_mut() {
            if last.index == index && last.end == start {
                last.end = end;
                return;
            }
        }

        self.timeline.push(ExecutionSlice {
            index,
            process_id: process.id.clone(),
            start,
            end,
        });
    }

    /// Records that `process` finished at `completion_time`.
    pub(crate) fn complete(&mut self, index: usize, process: &Process, completion_time: Ticks) {
        let completion = Completion {
            index,
            process_id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            start_time: self.first_start[index].unwrap_or(completion_time),
            completion_time,
        };
        log::debug!(
            "{} completed at t={} (wt={}, tat={})",
            completion.process_id,
            completion_time,
            completion.waiting_time(),
            completion.turnaround_time()
        );
        self.completions.push(completion);
    }

    pub(crate) fn finish(self, total_time: Ticks) -> SimulationOutcome {
        let count = self.completions.len();
        // Per-process times fit in Ticks; their sums may not.
        let (total_waiting, total_turnaround) =
            self.completions
                .iter()
                .fold((0i128, 0i128), |(wt, tat), c| {
                    (
                        wt + i128::from(c.waiting_time()),
                        tat + i128::from(c.turnaround_time()),
                    )
                });

        let average = |total: i128| {
            if count == 0 {
                0.0
            } else {
                total as f64 / count as f64
            }
        };

        SimulationOutcome {
            avg_waiting_time: average(total_waiting),
            avg_turnaround_time: average(total_turnaround),
            total_time,
            completions: self.completions,
            timeline: self.timeline,
        }
    }
}
