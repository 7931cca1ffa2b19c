//! Scheduling context for dispatching rule evaluation.

use crate::models::Ticks;

/// Runtime simulation state passed to dispatching rules.
///
/// Rules read per-process state (burst, remaining time, priority) from the
/// process itself; the context carries what is global to the decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulation clock (ticks).
    pub current_time: Ticks,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: Ticks) -> Self {
        Self { current_time }
    }

    /// Ticks a process arriving at `arrival_time` has spent waiting so far.
    #[inline]
    pub fn elapsed_since(&self, arrival_time: Ticks) -> Ticks {
        (self.current_time - arrival_time).max(0)
    }
}
