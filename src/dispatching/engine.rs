//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules in sequence: the first rule decides, later
//! rules only break its ties. When every rule ties, the candidate met first
//! in workload order wins.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{RuleEngine, rules};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::LowestPriority)
///     .with_rule(rules::ShortestBurst);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "SJF"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    ///
    /// With no rules every candidate ties, so selection degenerates to
    /// workload order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. Earlier rules take precedence.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the configured rules, in precedence order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Human-readable summary, e.g. "Process Priority, then Shortest Job First".
    pub fn describe(&self) -> String {
        if self.rules.is_empty() {
            return "Workload Order".to_string();
        }
        self.rules
            .iter()
            .map(|r| r.description())
            .collect::<Vec<_>>()
            .join(", then ")
    }

    /// Sorts processes by priority (highest priority first).
    ///
    /// Returns indices into `processes`. The sort is stable: ties keep
    /// workload order.
    pub fn sort_indices(&self, processes: &[Process], context: &SchedulingContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b], context));
        indices
    }

    /// Returns the index of the highest-priority candidate.
    ///
    /// `candidates` are indices into `processes`; callers pass them in
    /// ascending order so that a tie resolves to the lowest index.
    pub fn select_best(
        &self,
        processes: &[Process],
        candidates: impl IntoIterator<Item = usize>,
        context: &SchedulingContext,
    ) -> Option<usize> {
        let mut best: Option<usize> = None;
        for idx in candidates {
            best = match best {
                Some(current)
                    if self.compare(&processes[idx], &processes[current], context)
                        != Ordering::Less =>
                {
                    Some(current)
                }
                _ => Some(idx),
            };
        }
        best
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(&self, process: &Process, context: &SchedulingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(process, context))
            .collect()
    }

    /// Compares two processes rule by rule.
    ///
    /// Only an exact tie under one rule passes the decision to the next.
    pub fn compare(&self, a: &Process, b: &Process, context: &SchedulingContext) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.compare(a, b, context))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
