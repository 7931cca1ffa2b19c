//! First-Come-First-Served.
//!
//! Processes run to completion in arrival order. Ties in arrival keep
//! workload order. O(n log n).

use super::outcome::OutcomeRecorder;
use super::{SchedulingPolicy, SimulationOutcome};
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::models::Workload;

/// Non-preemptive First-Come-First-Served.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &str {
        "FCFS"
    }

    fn simulate(&self, workload: &Workload) -> SimulationOutcome {
        let mut processes = workload.working_copy();
        let order = RuleEngine::new()
            .with_rule(rules::EarliestArrival)
            .sort_indices(&processes, &SchedulingContext::default());

        let mut recorder = OutcomeRecorder::new(processes.len());
        let mut clock = 0;

        for idx in order {
            let process = &mut processes[idx];
            if clock < process.arrival_time {
                log::trace!("CPU idle over [{clock}, {})", process.arrival_time);
                clock = process.arrival_time;
            }

            let start = clock;
            clock += process.serve(process.burst_time);
            log::debug!("FCFS dispatch {} over [{start}, {clock})", process.id);

            recorder.run(idx, process, start, clock);
            recorder.complete(idx, process, clock);
        }

        recorder.finish(clock)
    }
}
