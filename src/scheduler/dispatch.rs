//! Non-preemptive rule-driven dispatching (SJF, Priority, HRRN).
//!
//! # Algorithm
//!
//! 1. At each decision point, the ready set is every process that has
//!    arrived and is not yet completed, in workload order.
//! 2. The rule engine selects the best ready process; ties go to the
//!    lowest workload index.
//! 3. The selected process runs to completion in one step.
//! 4. With an empty ready set, the clock jumps to the next arrival.
//!
//! Completion is tracked with an index-based marker array; processes are
//! never removed from the working set, so indices stay stable.
//!
//! # Complexity
//! O(n² · r) where r = number of rules.

use super::outcome::OutcomeRecorder;
use super::{skip_idle, SchedulingPolicy, SimulationOutcome};
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::models::Workload;

/// Non-preemptive policy selecting by a rule engine.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Process, Workload};
/// use u_cpusched::scheduler::{NonPreemptive, SchedulingPolicy};
///
/// let workload = Workload::new(vec![
///     Process::new("P1", 0, 6),
///     Process::new("P2", 1, 2),
///     Process::new("P3", 1, 4),
/// ]).unwrap();
///
/// let outcome = NonPreemptive::sjf().simulate(&workload);
/// assert_eq!(outcome.dispatch_order(), vec!["P1", "P2", "P3"]);
/// assert_eq!(outcome.total_time, 12);
/// ```
#[derive(Debug, Clone)]
pub struct NonPreemptive {
    name: String,
    engine: RuleEngine,
}

impl NonPreemptive {
    /// Creates a policy with a custom name and rule engine.
    pub fn new(name: impl Into<String>, engine: RuleEngine) -> Self {
        Self {
            name: name.into(),
            engine,
        }
    }

    /// Shortest Job First.
    pub fn sjf() -> Self {
        Self::new("SJF", RuleEngine::new().with_rule(rules::ShortestBurst))
    }

    /// Static priority, lower value first.
    ///
    /// No aging: a low-priority process can wait indefinitely behind a
    /// steady stream of more urgent arrivals.
    pub fn priority() -> Self {
        Self::new("Priority", RuleEngine::new().with_rule(rules::LowestPriority))
    }

    /// Highest Response Ratio Next.
    pub fn hrrn() -> Self {
        Self::new(
            "HRRN",
            RuleEngine::new().with_rule(rules::HighestResponseRatio),
        )
    }

    /// The rule engine driving selection.
    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }
}

impl SchedulingPolicy for NonPreemptive {
    fn name(&self) -> &str {
        &self.name
    }

    fn simulate(&self, workload: &Workload) -> SimulationOutcome {
        let mut processes = workload.working_copy();
        let n = processes.len();
        let mut completed = vec![false; n];
        let mut completed_count = 0;
        let mut recorder = OutcomeRecorder::new(n);
        let mut clock = 0;
        log::debug!("{} selects by {}", self.name, self.engine.describe());

        while completed_count < n {
            let context = SchedulingContext::at_time(clock);
            let ready = (0..n).filter(|&i| !completed[i] && processes[i].has_arrived(clock));

            let Some(idx) = self.engine.select_best(&processes, ready, &context) else {
                clock = skip_idle(&processes, clock);
                continue;
            };

            let process = &mut processes[idx];
            let start = clock;
            clock += process.serve(process.burst_time);
            log::debug!(
                "{} dispatch {} over [{start}, {clock})",
                self.name,
                process.id
            );

            recorder.run(idx, process, start, clock);
            recorder.complete(idx, process, clock);
            completed[idx] = true;
            completed_count += 1;
        }

        recorder.finish(clock)
    }
}
