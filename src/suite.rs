//! Policy comparison runs.
//!
//! Runs a list of policies against one workload and collects one
//! [`MetricResult`] per policy. Each policy simulates on its own copy of the
//! workload, so runs are independent and may execute in parallel.
//!
//! # Example
//!
//! ```
//! use u_cpusched::generator::fixtures;
//! use u_cpusched::scheduler::Quantum;
//! use u_cpusched::suite::Comparison;
//!
//! let rows = Comparison::standard(Quantum::default()).run(&fixtures::basic());
//! let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
//! assert_eq!(names, vec!["FCFS", "SJF", "Priority", "Round Robin", "SRTF", "HRRN"]);
//! ```

use std::sync::Arc;
use std::thread;

use crate::models::{Ticks, Workload};
use crate::scheduler::{
    Fcfs, MetricResult, NonPreemptive, Preemptive, Quantum, RoundRobin, SchedulingPolicy,
};

/// The six classic policies, in report order.
pub fn standard_policies(quantum: Quantum) -> Vec<Arc<dyn SchedulingPolicy>> {
    vec![
        Arc::new(Fcfs) as Arc<dyn SchedulingPolicy>,
        Arc::new(NonPreemptive::sjf()),
        Arc::new(NonPreemptive::priority()),
        Arc::new(RoundRobin::new(quantum)),
        Arc::new(Preemptive::srtf()),
        Arc::new(NonPreemptive::hrrn()),
    ]
}

/// Runs a policy and derives its comparison row.
pub fn evaluate(policy: &dyn SchedulingPolicy, workload: &Workload) -> MetricResult {
    let outcome = policy.simulate(workload);
    let row = MetricResult::calculate(policy.name(), &outcome, workload);
    log::info!(
        "{}: avg wt {:.2}, avg tat {:.2}, avg response {:.2}, max wt {}, horizon {}",
        row.name,
        row.avg_waiting_time,
        row.avg_turnaround_time,
        outcome.avg_response_time(),
        outcome.max_waiting_time(),
        row.total_time
    );
    row
}

/// An ordered set of policies to compare.
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    policies: Vec<Arc<dyn SchedulingPolicy>>,
}

impl Comparison {
    /// Creates an empty comparison.
    pub fn new() -> Self {
        Self::default()
    }

    /// Comparison of the six classic policies.
    pub fn standard(quantum: Quantum) -> Self {
        Self {
            policies: standard_policies(quantum),
        }
    }

    /// Appends a policy.
    pub fn with_policy<P: SchedulingPolicy + 'static>(mut self, policy: P) -> Self {
        self.policies.push(Arc::new(policy));
        self
    }

    /// The configured policies, in run order.
    pub fn policies(&self) -> &[Arc<dyn SchedulingPolicy>] {
        &self.policies
    }

    /// Runs every policy in order on the calling thread.
    pub fn run(&self, workload: &Workload) -> Vec<MetricResult> {
        log::info!(
            "comparing {} policies on {} processes",
            self.policies.len(),
            workload.len()
        );
        self.policies
            .iter()
            .map(|policy| evaluate(policy.as_ref(), workload))
            .collect()
    }

    /// Runs every policy on its own scoped thread.
    ///
    /// Rows come back in policy order and equal those of [`Comparison::run`].
    pub fn run_parallel(&self, workload: &Workload) -> Vec<MetricResult> {
        log::info!(
            "comparing {} policies on {} processes ({} threads)",
            self.policies.len(),
            workload.len(),
            self.policies.len()
        );
        thread::scope(|scope| {
            let handles: Vec<_> = self
                .policies
                .iter()
                .map(|policy| scope.spawn(move || evaluate(policy.as_ref(), workload)))
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(row) => row,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    }
}

/// Settings for the fixture comparison run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Round Robin quantum.
    pub quantum: Quantum,
    /// Size of the random workload.
    pub random_count: usize,
    /// Seed for the random workload.
    pub seed: u64,
}

impl SuiteConfig {
    /// Environment variable overriding the quantum.
    pub const QUANTUM_VAR: &'static str = "U_CPUSCHED_QUANTUM";
    /// Environment variable overriding the random workload size.
    pub const COUNT_VAR: &'static str = "U_CPUSCHED_COUNT";
    /// Environment variable overriding the seed.
    pub const SEED_VAR: &'static str = "U_CPUSCHED_SEED";

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: Quantum) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the random workload size.
    pub fn with_random_count(mut self, count: usize) -> Self {
        self.random_count = count;
        self
    }

    /// Sets the random workload seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reads overrides from the process environment.
    ///
    /// Absent or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(quantum) = lookup(Self::QUANTUM_VAR)
            .and_then(|v| v.trim().parse::<Ticks>().ok())
            .and_then(|v| Quantum::new(v).ok())
        {
            config.quantum = quantum;
        }
        if let Some(count) = lookup(Self::COUNT_VAR)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&c| c > 0)
        {
            config.random_count = count;
        }
        if let Some(seed) = lookup(Self::SEED_VAR).and_then(|v| v.trim().parse::<u64>().ok()) {
            config.seed = seed;
        }

        config
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            quantum: Quantum::default(),
            random_count: 50,
            seed: 2024,
        }
    }
}
