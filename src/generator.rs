//! Workload generation and canonical fixtures.
//!
//! Random workloads are drawn from an explicitly passed RNG, so a fixed
//! seed always reproduces the same processes.
//!
//! # Example
//!
//! ```
//! use u_cpusched::generator::WorkloadGenerator;
//!
//! let generator = WorkloadGenerator::new(10).with_burst_range(1, 4);
//! let a = generator.generate_seeded(7).unwrap();
//! let b = generator.generate_seeded(7).unwrap();
//! assert_eq!(a, b);
//! assert!(a.iter().all(|p| (1..4).contains(&p.burst_time)));
//!
//! // Zero-length bursts are rejected like any other invalid workload.
//! assert!(WorkloadGenerator::new(3).with_burst_range(0, 1).generate_seeded(7).is_err());
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Process, Ticks, Workload};
use crate::validation::InvalidWorkload;

/// Random workload generator.
///
/// All ranges are half-open `[low, high)`. Process IDs are `P1..Pn` in
/// generation order.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadGenerator {
    /// Number of processes to generate.
    pub count: usize,
    /// Arrival time range.
    pub arrival_range: (Ticks, Ticks),
    /// Burst time range.
    pub burst_range: (Ticks, Ticks),
    /// Priority range.
    pub priority_range: (i32, i32),
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Sets the arrival time range.
    pub fn with_arrival_range(mut self, low: Ticks, high: Ticks) -> Self {
        self.arrival_range = (low, high);
        self
    }

    /// Sets the burst time range.
    pub fn with_burst_range(mut self, low: Ticks, high: Ticks) -> Self {
        self.burst_range = (low, high);
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, low: i32, high: i32) -> Self {
        self.priority_range = (low, high);
        self
    }

    /// Generates raw processes from `rng`.
    ///
    /// Degenerate ranges (`high <= low`) yield `low`.
    pub fn generate_processes<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count)
            .map(|i| {
                let arrival = sample(rng, self.arrival_range);
                let burst = sample(rng, self.burst_range);
                let priority = sample(rng, self.priority_range);
                Process::new(format!("P{i}"), arrival, burst).with_priority(priority)
            })
            .collect()
    }

    /// Generates a validated workload from `rng`.
    ///
    /// Fails when the draws break a workload invariant: zero count,
    /// negative arrivals or non-positive bursts.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Workload, InvalidWorkload> {
        Workload::new(self.generate_processes(rng))
    }

    /// Generates a workload from a fresh RNG seeded with `seed`.
    pub fn generate_seeded(&self, seed: u64) -> Result<Workload, InvalidWorkload> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            count: 50,
            arrival_range: (0, 100),
            burst_range: (5, 15),
            priority_range: (1, 10),
        }
    }
}

fn sample<R, T>(rng: &mut R, (low, high): (T, T)) -> T
where
    R: Rng,
    T: rand::distr::uniform::SampleUniform + PartialOrd + Copy,
{
    if high <= low {
        low
    } else {
        rng.random_range(low..high)
    }
}

/// The three canonical comparison workloads.
pub mod fixtures {
    use super::WorkloadGenerator;
    use crate::models::{Process, Workload};
    use crate::validation::InvalidWorkload;

    fn build(processes: Vec<Process>) -> Workload {
        match Workload::new(processes) {
            Ok(workload) => workload,
            Err(e) => unreachable!("fixture is invalid: {e}"),
        }
    }

    /// Small hand-built workload with staggered arrivals.
    pub fn basic() -> Workload {
        build(vec![
            Process::new("P1", 0, 8).with_priority(2),
            Process::new("P2", 1, 4).with_priority(1),
            Process::new("P3", 2, 9).with_priority(3),
            Process::new("P4", 3, 5).with_priority(2),
            Process::new("P5", 4, 2).with_priority(1),
        ])
    }

    /// Five equal bursts that all arrive at tick 0.
    pub fn uniform_arrivals() -> Workload {
        build(vec![
            Process::new("P1", 0, 20).with_priority(3),
            Process::new("P2", 0, 20).with_priority(1),
            Process::new("P3", 0, 20).with_priority(2),
            Process::new("P4", 0, 20).with_priority(5),
            Process::new("P5", 0, 20).with_priority(4),
        ])
    }

    /// Random medium-size workload with default generator ranges.
    ///
    /// Fails only for `count == 0`.
    pub fn random(count: usize, seed: u64) -> Result<Workload, InvalidWorkload> {
        WorkloadGenerator::new(count).generate_seeded(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_generator_defaults() {
        let g = WorkloadGenerator::default();
        assert_eq!(g.count, 50);
        assert_eq!(g.arrival_range, (0, 100));
        assert_eq!(g.burst_range, (5, 15));
        assert_eq!(g.priority_range, (1, 10));
    }

    #[test]
    fn test_generated_values_in_range() {
        let w = WorkloadGenerator::new(200).generate_seeded(42).unwrap();
        assert_eq!(w.len(), 200);
        for p in &w {
            assert!((0..100).contains(&p.arrival_time));
            assert!((5..15).contains(&p.burst_time));
            assert!((1..10).contains(&p.priority));
            assert_eq!(p.remaining_time, p.burst_time);
        }
        assert_eq!(w.processes()[0].id, "P1");
        assert_eq!(w.processes()[199].id, "P200");
    }

    #[test]
    fn test_seed_reproducible() {
        let g = WorkloadGenerator::new(30);
        assert_eq!(g.generate_seeded(1).unwrap(), g.generate_seeded(1).unwrap());
        assert_ne!(g.generate_seeded(1).unwrap(), g.generate_seeded(2).unwrap());
    }

    #[test]
    fn test_explicit_rng() {
        let g = WorkloadGenerator::new(5).with_arrival_range(3, 4);
        let mut rng = StdRng::seed_from_u64(9);
        let w = g.generate(&mut rng).unwrap();
        assert!(w.iter().all(|p| p.arrival_time == 3));
    }

    #[test]
    fn test_degenerate_range() {
        let g = WorkloadGenerator::new(3)
            .with_burst_range(7, 7)
            .with_priority_range(2, 1);
        let w = g.generate_seeded(0).unwrap();
        assert!(w.iter().all(|p| p.burst_time == 7 && p.priority == 2));
    }

    #[test]
    fn test_zero_count_is_rejected() {
        let err = WorkloadGenerator::new(0).generate_seeded(0).unwrap_err();
        assert_eq!(err.errors[0].kind, ValidationErrorKind::EmptyWorkload);
        assert!(fixtures::random(0, 1).is_err());
    }

    #[test]
    fn test_invalid_ranges_are_rejected() {
        let zero_bursts = WorkloadGenerator::new(4)
            .with_burst_range(0, 1)
            .generate_seeded(3)
            .unwrap_err();
        assert_eq!(zero_bursts.errors.len(), 4);
        assert!(zero_bursts
            .errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonPositiveBurst));

        let negative = WorkloadGenerator::new(2)
            .with_arrival_range(-5, -5)
            .generate_seeded(3)
            .unwrap_err();
        assert!(negative
            .errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_fixtures() {
        assert_eq!(fixtures::basic().len(), 5);
        assert_eq!(fixtures::basic().total_burst_time(), 28);
        let uniform = fixtures::uniform_arrivals();
        assert!(uniform.iter().all(|p| p.arrival_time == 0 && p.burst_time == 20));
        assert_eq!(fixtures::random(50, 3).unwrap(), fixtures::random(50, 3).unwrap());
    }
}
