//! Dispatching rules and rule engine for process selection.
//!
//! Provides the selection keys behind the dynamic policies (shortest burst,
//! priority, shortest remaining time, response ratio, arrival order) and a
//! composable rule engine that picks the best ready process.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{RuleEngine, SchedulingContext};
//! use u_cpusched::dispatching::rules;
//! use u_cpusched::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::LowestPriority)
//!     .with_rule(rules::ShortestBurst);
//!
//! let processes = vec![
//!     Process::new("A", 0, 9).with_priority(1),
//!     Process::new("B", 0, 3).with_priority(1),
//! ];
//! let context = SchedulingContext::at_time(0);
//! assert_eq!(engine.select_best(&processes, 0..2, &context), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Brinch Hansen (1971), "Short-term Scheduling in Multiprogramming Systems" (HRRN)

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::RuleEngine;

use crate::models::Process;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "HRR").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process given the current context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore;

    /// Orders two processes under this rule (`Less` = `a` runs first).
    ///
    /// Defaults to comparing `evaluate` scores exactly. Rules keyed on
    /// integer ticks override it so large values keep full precision.
    fn compare(&self, a: &Process, b: &Process, context: &SchedulingContext) -> Ordering {
        self.evaluate(a, context)
            .partial_cmp(&self.evaluate(b, context))
            .unwrap_or(Ordering::Equal)
    }

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
