//! Round Robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Scan the working set in workload index order.
//! 2. Every arrived, unfinished process receives `min(remaining, quantum)`
//!    ticks; the clock advances by the ticks served.
//! 3. A process whose remaining time reaches zero completes at the current
//!    clock, and the outstanding counter drops.
//! 4. A scan that serves nobody means the CPU is idle: the clock jumps to
//!    the next arrival.
//! 5. Stop when nothing is outstanding.
//!
//! Scan order, not arrival order, decides who runs first at each quantum
//! boundary.

use serde::{Deserialize, Serialize};

use super::outcome::OutcomeRecorder;
use super::{skip_idle, SchedulingPolicy, SimulationOutcome};
use crate::models::{Ticks, Workload};
use crate::validation::{validate_quantum, ValidationError};

/// A positive time slice length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Ticks", into = "Ticks")]
pub struct Quantum(Ticks);

impl Quantum {
    /// Creates a quantum; rejects zero and negative lengths.
    pub fn new(ticks: Ticks) -> Result<Self, ValidationError> {
        validate_quantum(ticks)?;
        Ok(Self(ticks))
    }

    /// Slice length in ticks.
    #[inline]
    pub fn get(self) -> Ticks {
        self.0
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self(2)
    }
}

impl TryFrom<Ticks> for Quantum {
    type Error = ValidationError;

    fn try_from(ticks: Ticks) -> Result<Self, Self::Error> {
        Self::new(ticks)
    }
}

impl From<Quantum> for Ticks {
    fn from(quantum: Quantum) -> Self {
        quantum.0
    }
}

/// Preemptive Round Robin.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Process, Workload};
/// use u_cpusched::scheduler::{Quantum, RoundRobin, SchedulingPolicy};
///
/// let workload = Workload::new(vec![
///     Process::new("P1", 0, 4),
///     Process::new("P2", 1, 2),
/// ]).unwrap();
///
/// let rr = RoundRobin::new(Quantum::new(2).unwrap());
/// let outcome = rr.simulate(&workload);
/// assert_eq!(outcome.dispatch_order(), vec!["P1", "P2", "P1"]);
/// assert_eq!(outcome.total_time, 6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin {
    quantum: Quantum,
}

impl RoundRobin {
    /// Creates a Round Robin policy with the given quantum.
    pub fn new(quantum: Quantum) -> Self {
        Self { quantum }
    }

    /// The configured quantum.
    pub fn quantum(&self) -> Quantum {
        self.quantum
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &str {
        "Round Robin"
    }

    fn simulate(&self, workload: &Workload) -> SimulationOutcome {
        let mut processes = workload.working_copy();
        let n = processes.len();
        let quantum = self.quantum.get();
        let mut outstanding = n;
        let mut recorder = OutcomeRecorder::new(n);
        let mut clock = 0;

        while outstanding > 0 {
            let mut served_any = false;

            for (idx, process) in processes.iter_mut().enumerate() {
                if !process.is_ready(clock) {
                    continue;
                }

                let start = clock;
                clock += process.serve(quantum);
                served_any = true;
                log::debug!("RR slice {} over [{start}, {clock})", process.id);
                recorder.run(idx, process, start, clock);

                if !process.is_runnable() {
                    recorder.complete(idx, process, clock);
                    outstanding -= 1;
                }
            }

            if !served_any {
                clock = skip_idle(&processes, clock);
            }
        }

        recorder.finish(clock)
    }
}
