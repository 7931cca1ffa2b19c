//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Time-based**: SJF (burst), SRT (remaining time)
//! - **Fairness**: HRR (response ratio), FIFO (arrival)
//! - **Priority**: PRIORITY
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes.

use std::cmp::Ordering;

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

// ======================== Time-based rules ========================

/// Shortest Job First.
///
/// Prioritizes processes with shorter total burst time.
/// Minimizes average waiting time among non-preemptive policies.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.burst_time as f64
    }

    fn compare(&self, a: &Process, b: &Process, _context: &SchedulingContext) -> Ordering {
        a.burst_time.cmp(&b.burst_time)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time.
///
/// Prioritizes processes closest to completion. Reads the process's
/// `remaining_time`, so it only differs from [`ShortestBurst`] under
/// preemption.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.remaining_time as f64
    }

    fn compare(&self, a: &Process, b: &Process, _context: &SchedulingContext) -> Ordering {
        a.remaining_time.cmp(&b.remaining_time)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

// ======================== Fairness rules ========================

/// Highest Response Ratio.
///
/// Ratio = (waiting so far + burst) / burst. Grows while a process waits,
/// so long jobs cannot starve behind a stream of short ones.
///
/// Burst must be positive; a validated workload guarantees it.
#[derive(Debug, Clone, Copy)]
pub struct HighestResponseRatio;

impl HighestResponseRatio {
    /// Response ratio of `process` at the context's time.
    pub fn ratio(process: &Process, context: &SchedulingContext) -> f64 {
        let burst = process.burst_time as f64;
        (context.elapsed_since(process.arrival_time) as f64 + burst) / burst
    }

    // Ratio numerator, widened so the cross products cannot overflow.
    fn span(process: &Process, context: &SchedulingContext) -> i128 {
        i128::from(context.elapsed_since(process.arrival_time)) + i128::from(process.burst_time)
    }
}

impl DispatchingRule for HighestResponseRatio {
    fn name(&self) -> &'static str {
        "HRR"
    }

    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore {
        -Self::ratio(process, context) // Higher ratio = higher priority → negate
    }

    fn compare(&self, a: &Process, b: &Process, context: &SchedulingContext) -> Ordering {
        // ratio(a) > ratio(b)  <=>  (w_a + b_a) * b_b > (w_b + b_b) * b_a
        let lhs = Self::span(a, context) * i128::from(b.burst_time);
        let rhs = Self::span(b, context) * i128::from(a.burst_time);
        rhs.cmp(&lhs)
    }

    fn description(&self) -> &'static str {
        "Highest Response Ratio"
    }
}

/// First In First Out.
///
/// Prioritizes processes by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl DispatchingRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.arrival_time as f64
    }

    fn compare(&self, a: &Process, b: &Process, _context: &SchedulingContext) -> Ordering {
        a.arrival_time.cmp(&b.arrival_time)
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

// ======================== Priority-based rule ========================

/// Static priority rule.
///
/// Prioritizes processes with lower `priority` values. No aging.
#[derive(Debug, Clone, Copy)]
pub struct LowestPriority;

impl DispatchingRule for LowestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.priority as f64
    }

    fn compare(&self, a: &Process, b: &Process, _context: &SchedulingContext) -> Ordering {
        a.priority.cmp(&b.priority)
    }

    fn description(&self) -> &'static str {
        "Process Priority"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_burst() {
        let ctx = SchedulingContext::at_time(0);
        let short = Process::new("short", 0, 2);
        let long = Process::new("long", 0, 9);
        assert!(ShortestBurst.evaluate(&short, &ctx) < ShortestBurst.evaluate(&long, &ctx));
    }

    #[test]
    fn test_shortest_remaining_reads_scratch_state() {
        let ctx = SchedulingContext::at_time(0);
        let mut started = Process::new("started", 0, 10);
        started.serve(8);
        let fresh = Process::new("fresh", 0, 4);
        assert!(ShortestRemaining.evaluate(&started, &ctx) < ShortestRemaining.evaluate(&fresh, &ctx));
        // Burst-based rule ignores progress
        assert!(ShortestBurst.evaluate(&fresh, &ctx) < ShortestBurst.evaluate(&started, &ctx));
    }

    #[test]
    fn test_response_ratio() {
        let ctx = SchedulingContext::at_time(10);
        // Waited 6, burst 3 → (6+3)/3 = 3.0
        let p = Process::new("P", 4, 3);
        assert!((HighestResponseRatio::ratio(&p, &ctx) - 3.0).abs() < 1e-10);
        assert!((HighestResponseRatio.evaluate(&p, &ctx) + 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_response_ratio_favors_long_waiters() {
        let ctx = SchedulingContext::at_time(20);
        // (20+10)/10 = 3.0
        let waited = Process::new("waited", 0, 10);
        // (1+2)/2 = 1.5
        let fresh = Process::new("fresh", 19, 2);
        assert!(
            HighestResponseRatio.evaluate(&waited, &ctx)
                < HighestResponseRatio.evaluate(&fresh, &ctx)
        );
    }

    #[test]
    fn test_response_ratio_before_arrival() {
        let ctx = SchedulingContext::at_time(0);
        let p = Process::new("P", 5, 4);
        assert!((HighestResponseRatio::ratio(&p, &ctx) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_response_ratio_compare_is_exact() {
        let ctx = SchedulingContext::at_time(1);
        let a = Process::new("A", 0, 100_000);
        let b = Process::new("B", 0, 100_001);
        assert_eq!(HighestResponseRatio.compare(&a, &b, &ctx), Ordering::Less);
        assert_eq!(HighestResponseRatio.compare(&b, &a, &ctx), Ordering::Greater);
        // (2+2)/2 == (4+4)/4
        let ctx = SchedulingContext::at_time(4);
        let c = Process::new("C", 2, 2);
        let d = Process::new("D", 0, 4);
        assert_eq!(HighestResponseRatio.compare(&c, &d, &ctx), Ordering::Equal);
    }

    #[test]
    fn test_earliest_arrival() {
        let ctx = SchedulingContext::at_time(50);
        let first = Process::new("first", 1, 9);
        let second = Process::new("second", 3, 1);
        assert!(EarliestArrival.evaluate(&first, &ctx) < EarliestArrival.evaluate(&second, &ctx));
    }

    #[test]
    fn test_lowest_priority() {
        let ctx = SchedulingContext::at_time(0);
        let urgent = Process::new("urgent", 0, 5).with_priority(1);
        let relaxed = Process::new("relaxed", 0, 5).with_priority(5);
        assert!(LowestPriority.evaluate(&urgent, &ctx) < LowestPriority.evaluate(&relaxed, &ctx));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(ShortestBurst.description(), "Shortest Job First");
        assert_eq!(HighestResponseRatio.name(), "HRR");
        assert_eq!(LowestPriority.description(), "Process Priority");
    }
}
