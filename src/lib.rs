//! Uniprocessor CPU-scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates classic scheduling policies over a fixed workload on a discrete
//! tick axis and reports comparative metrics (average waiting time, average
//! turnaround time, CPU utilization, throughput).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Workload`
//! - **`validation`**: Workload and quantum integrity checks
//! - **`dispatching`**: Selection rules (SJF, SRT, HRR, PRIORITY, FIFO) and the rule engine
//! - **`scheduler`**: The six policies, simulation outcomes, `MetricResult`
//! - **`generator`**: Seeded random workloads and canonical fixtures
//! - **`suite`**: Multi-policy comparison runs
//! - **`report`**: Plain-text metric tables
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::{Process, Workload};
//! use u_cpusched::scheduler::{Fcfs, SchedulingPolicy};
//!
//! let workload = Workload::new(vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 2, 3),
//! ]).unwrap();
//!
//! let outcome = Fcfs.simulate(&workload);
//! assert_eq!(outcome.total_time, 8);
//! assert!((outcome.avg_waiting_time - 1.5).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

pub mod dispatching;
pub mod generator;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod suite;
pub mod validation;
