//! Input validation for simulation workloads.
//!
//! Checks the invariants every policy relies on before a workload is
//! accepted. Detects:
//! - Empty workloads (averages would divide by zero)
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times (response ratio and utilization divide by them)
//! - Horizons (latest arrival + total burst) beyond the `Ticks` range
//! - Non-positive Round Robin quanta

use crate::models::{Process, Ticks};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The workload has no processes.
    EmptyWorkload,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before tick 0.
    NegativeArrival,
    /// A process requires zero or negative CPU time.
    NonPositiveBurst,
    /// Latest arrival plus total burst does not fit in `Ticks`.
    HorizonOverflow,
    /// A Round Robin quantum is zero or negative.
    InvalidQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// All problems found in a rejected workload.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidWorkload {
    /// Every detected issue, in detection order.
    pub errors: Vec<ValidationError>,
}

impl InvalidWorkload {
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

impl fmt::Display for InvalidWorkload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid workload: ")?;
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidWorkload {}

/// Validates a workload before simulation.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. All arrival times ≥ 0
/// 4. All burst times > 0
/// 5. Latest arrival + total burst fits in `Ticks`, which bounds every
///    clock value a policy can reach
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "Workload has no processes",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }
    }

    if horizon_bound(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            format!(
                "Latest arrival plus total burst exceeds {} ticks",
                Ticks::MAX
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `max(arrival) + sum(burst)`, or `None` on overflow.
///
/// No policy idles past the latest arrival, so the clock never exceeds it.
pub fn horizon_bound(processes: &[Process]) -> Option<Ticks> {
    let work = processes
        .iter()
        .try_fold(0 as Ticks, |acc, p| acc.checked_add(p.burst_time))?;
    let latest = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    latest.checked_add(work)
}

/// Validates a Round Robin time quantum.
pub fn validate_quantum(quantum: Ticks) -> Result<(), ValidationError> {
    if quantum <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Quantum must be positive, got {quantum}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 8).with_priority(2),
            Process::new("P2", 1, 4).with_priority(1),
            Process::new("P3", 2, 9).with_priority(3),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_workload(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_workload() {
        let errors = validate_workload(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyWorkload);
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new("P1", 0, 3), Process::new("P1", 1, 2)];
        let errors = validate_workload(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("P1")));
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::new("P1", -1, 3)];
        let errors = validate_workload(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![Process::new("P1", 0, 0), Process::new("P2", 0, -4)];
        let errors = validate_workload(&processes).unwrap_err();
        let count = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurst)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![Process::new("P1", -5, 0), Process::new("P1", 0, 1)];
        let errors = validate_workload(&processes).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_horizon_overflow() {
        let processes = vec![Process::new("P", Ticks::MAX - 1, 5)];
        let errors = validate_workload(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::HorizonOverflow);

        let half = Ticks::MAX / 2 + 1;
        let processes = vec![Process::new("P1", 0, half), Process::new("P2", 0, half)];
        assert!(validate_workload(&processes)
            .unwrap_err()
            .iter()
            .any(|e| e.kind == ValidationErrorKind::HorizonOverflow));
    }

    #[test]
    fn test_horizon_at_limit() {
        let processes = vec![Process::new("P", Ticks::MAX - 5, 5)];
        assert!(validate_workload(&processes).is_ok());
        assert_eq!(horizon_bound(&processes), Some(Ticks::MAX));
        assert_eq!(horizon_bound(&sample_processes()), Some(2 + 21));
    }

    #[test]
    fn test_quantum() {
        assert!(validate_quantum(1).is_ok());
        assert_eq!(
            validate_quantum(0).unwrap_err().kind,
            ValidationErrorKind::InvalidQuantum
        );
        assert!(validate_quantum(-3).is_err());
    }

    #[test]
    fn test_invalid_workload_display() {
        let err = InvalidWorkload::new(validate_workload(&[Process::new("P1", -1, 0)]).unwrap_err());
        let text = err.to_string();
        assert!(text.starts_with("invalid workload: "));
        assert!(text.contains("negative arrival"));
        assert!(text.contains("; "));
    }
}
