//! Plain-text comparison tables.

use std::fmt;

use crate::scheduler::MetricResult;

const RULE_WIDTH: usize = 60;

/// A titled table of policy rows.
///
/// # Example
///
/// ```
/// use u_cpusched::report::MetricTable;
/// use u_cpusched::scheduler::MetricResult;
///
/// let row = MetricResult {
///     name: "FCFS".into(),
///     avg_waiting_time: 1.5,
///     avg_turnaround_time: 5.5,
///     cpu_utilization: 100.0,
///     throughput: 0.25,
///     total_time: 8,
/// };
/// let text = MetricTable::new("Demo", vec![row]).to_string();
/// assert!(text.contains("FCFS         |     1.50 |     5.50 |   100.00% |       0.25/tick"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MetricTable {
    /// Table heading.
    pub title: String,
    /// Rows, in display order.
    pub rows: Vec<MetricResult>,
}

impl MetricTable {
    /// Creates a table.
    pub fn new(title: impl Into<String>, rows: Vec<MetricResult>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }

    /// Row with the lowest average waiting time.
    pub fn best_by_waiting_time(&self) -> Option<&MetricResult> {
        self.rows
            .iter()
            .min_by(|a, b| a.avg_waiting_time.total_cmp(&b.avg_waiting_time))
    }
}

impl fmt::Display for MetricTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {} Results ---", self.title)?;
        writeln!(
            f,
            "{:<12} | {:>8} | {:>8} | {:>8} | {:>12}",
            "Algorithm", "Avg WT", "Avg TAT", "CPU Util", "Throughput"
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<12} | {:>8.2} | {:>8.2} | {:>8.2}% | {:>10.2}/tick",
                row.name,
                row.avg_waiting_time,
                row.avg_turnaround_time,
                row.cpu_utilization,
                row.throughput
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, wt: f64) -> MetricResult {
        MetricResult {
            name: name.into(),
            avg_waiting_time: wt,
            avg_turnaround_time: wt + 5.0,
            cpu_utilization: 87.5,
            throughput: 0.2,
            total_time: 16,
        }
    }

    #[test]
    fn test_table_layout() {
        let table = MetricTable::new("Basic Test", vec![row("SJF", 3.0), row("Round Robin", 4.25)]);
        let text = table.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "--- Basic Test Results ---");
        assert_eq!(
            lines[1],
            "Algorithm    |   Avg WT |  Avg TAT | CPU Util |   Throughput"
        );
        assert_eq!(lines[2], "-".repeat(60));
        assert_eq!(
            lines[3],
            "SJF          |     3.00 |     8.00 |    87.50% |       0.20/tick"
        );
        assert!(lines[4].starts_with("Round Robin  |     4.25 |     9.25 |"));
    }

    #[test]
    fn test_best_by_waiting_time() {
        let table = MetricTable::new("T", vec![row("A", 3.0), row("B", 1.0), row("C", 2.0)]);
        assert_eq!(table.best_by_waiting_time().map(|r| r.name.as_str()), Some("B"));
        assert!(MetricTable::new("empty", Vec::new()).best_by_waiting_time().is_none());
    }
}
