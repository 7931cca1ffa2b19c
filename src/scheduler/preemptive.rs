//! Tick-granular preemptive dispatching (SRTF).
//!
//! The rule engine re-selects among ready processes at every tick, so a
//! newly arrived process preempts the running one as soon as it scores
//! strictly better. Equal scores keep the lowest workload index.
//!
//! # Complexity
//! O(n · T) where T = simulated horizon. Suitable for small horizons only.

use super::outcome::OutcomeRecorder;
use super::{skip_idle, SchedulingPolicy, SimulationOutcome};
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::models::Workload;

/// Preemptive policy that re-evaluates a rule engine every tick.
///
/// Rules see each process's current `remaining_time`.
#[derive(Debug, Clone)]
pub struct Preemptive {
    name: String,
    engine: RuleEngine,
}

impl Preemptive {
    /// Creates a policy with a custom name and rule engine.
    pub fn new(name: impl Into<String>, engine: RuleEngine) -> Self {
        Self {
            name: name.into(),
            engine,
        }
    }

    /// Shortest Remaining Time First.
    pub fn srtf() -> Self {
        Self::new("SRTF", RuleEngine::new().with_rule(rules::ShortestRemaining))
    }

    /// The rule engine driving selection.
    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }
}

impl SchedulingPolicy for Preemptive {
    fn name(&self) -> &str {
        &self.name
    }

    fn simulate(&self, workload: &Workload) -> SimulationOutcome {
        let mut processes = workload.working_copy();
        let n = processes.len();
        let mut completed_count = 0;
        let mut recorder = OutcomeRecorder::new(n);
        let mut time = 0;
        log::debug!("{} selects by {}", self.name, self.engine.describe());

        while completed_count < n {
            let context = SchedulingContext::at_time(time);
            let ready = (0..n).filter(|&i| processes[i].is_ready(time));

            let Some(idx) = self.engine.select_best(&processes, ready, &context) else {
                time = skip_idle(&processes, time);
                continue;
            };

            let process = &mut processes[idx];
            process.serve(1);
            log::trace!(
                "{} t={time}: {} (remaining {})",
                self.name,
                process.id,
                process.remaining_time
            );
            recorder.run(idx, process, time, time + 1);

            if !process.is_runnable() {
                recorder.complete(idx, process, time + 1);
                completed_count += 1;
            }
            time += 1;
        }

        recorder.finish(time)
    }
}
