//! Process (schedulable unit) model.
//!
//! A process is a single CPU burst that becomes eligible at its arrival
//! tick and must receive `burst_time` ticks of service to complete.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Simulation time in integer ticks.
pub type Ticks = i64;

/// A process to be scheduled.
///
/// `id`, `arrival_time`, `burst_time` and `priority` describe the workload
/// and never change. `remaining_time` is scratch state for preemptive
/// policies; it starts at `burst_time` and reaches zero on completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProcessRecord")]
pub struct Process {
    /// Unique process label. Never used for ordering.
    pub id: String,
    /// Tick at which the process becomes eligible.
    pub arrival_time: Ticks,
    /// Total CPU ticks required.
    pub burst_time: Ticks,
    /// Scheduling priority (lower = more urgent).
    pub priority: i32,
    /// Ticks of service still owed.
    pub remaining_time: Ticks,
}

/// Serialized form of a process; `priority` and `remaining_time` are optional.
#[derive(Deserialize)]
struct ProcessRecord {
    id: String,
    arrival_time: Ticks,
    burst_time: Ticks,
    #[serde(default)]
    priority: i32,
    #[serde(default)]
    remaining_time: Option<Ticks>,
}

impl From<ProcessRecord> for Process {
    fn from(record: ProcessRecord) -> Self {
        // Missing means untouched; present values are clamped to [0, burst].
        let remaining_time = record
            .remaining_time
            .unwrap_or(record.burst_time)
            .clamp(0, record.burst_time.max(0));
        Self {
            id: record.id,
            arrival_time: record.arrival_time,
            burst_time: record.burst_time,
            priority: record.priority,
            remaining_time,
        }
    }
}

impl Process {
    /// Creates a process with `remaining_time` set to `burst_time`.
    pub fn new(id: impl Into<String>, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: Ticks) -> bool {
        self.arrival_time <= time
    }

    /// Whether the process still needs CPU time.
    #[inline]
    pub fn is_runnable(&self) -> bool {
        self.remaining_time > 0
    }

    /// Whether the process can be dispatched at `time`.
    #[inline]
    pub fn is_ready(&self, time: Ticks) -> bool {
        self.has_arrived(time) && self.is_runnable()
    }

    /// Returns a copy with the scratch state reset.
    pub fn fresh(&self) -> Self {
        Self {
            remaining_time: self.burst_time,
            ..self.clone()
        }
    }

    /// Serves `ticks` of CPU time, clamped to what remains.
    ///
    /// Returns the ticks actually consumed.
    pub fn serve(&mut self, ticks: Ticks) -> Ticks {
        let used = ticks.min(self.remaining_time).max(0);
        self.remaining_time -= used;
        used
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 3, 8).with_priority(2);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 8);
        assert_eq!(p.priority, 2);
        assert_eq!(p.remaining_time, 8);
    }

    #[test]
    fn test_readiness() {
        let p = Process::new("P1", 3, 8);
        assert!(!p.is_ready(2));
        assert!(p.is_ready(3));
        assert!(p.is_ready(100));
    }

    #[test]
    fn test_serve_clamps() {
        let mut p = Process::new("P1", 0, 5);
        assert_eq!(p.serve(2), 2);
        assert_eq!(p.remaining_time, 3);
        assert_eq!(p.serve(10), 3);
        assert_eq!(p.remaining_time, 0);
        assert!(!p.is_runnable());
        assert_eq!(p.serve(1), 0);
        assert_eq!(p.remaining_time, 0);
    }

    #[test]
    fn test_fresh_resets_remaining() {
        let mut p = Process::new("P1", 0, 5);
        p.serve(4);
        let f = p.fresh();
        assert_eq!(f.remaining_time, 5);
        assert_eq!(p.remaining_time, 1);
    }

    #[test]
    fn test_deserialize_without_remaining() {
        let p: Process =
            serde_json::from_str(r#"{"id":"P1","arrival_time":0,"burst_time":4}"#).unwrap();
        assert_eq!(p.priority, 0);
        assert_eq!(p.remaining_time, 4);
        assert!(p.is_runnable());
    }

    #[test]
    fn test_deserialize_remaining_is_clamped() {
        let parse = |remaining: i64| -> Process {
            let json = format!(
                r#"{{"id":"P1","arrival_time":0,"burst_time":4,"remaining_time":{remaining}}}"#
            );
            serde_json::from_str(&json).unwrap()
        };
        assert_eq!(parse(2).remaining_time, 2);
        assert_eq!(parse(-3).remaining_time, 0);
        assert_eq!(parse(10).remaining_time, 4);
    }

    #[test]
    fn test_serde_keeps_scratch_state() {
        let mut p = Process::new("P1", 1, 6).with_priority(3);
        p.serve(2);
        let back: Process = serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
        assert_eq!(back, p);
    }
}
