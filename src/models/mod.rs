//! CPU-scheduling domain models.
//!
//! Provides the data types shared by every policy: the process record and
//! the validated workload a simulation run consumes.
//!
//! # Domain Mappings
//!
//! | u-cpusched | Textbook term |
//! |------------|---------------|
//! | Process | CPU burst / job |
//! | Workload | Ready-queue input |
//! | Ticks | Time unit |

mod process;
mod workload;

pub use process::{Process, Ticks};
pub use workload::Workload;
