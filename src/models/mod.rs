//! Simulation domain models.
//!
//! Provides the data types for describing a CPU scheduling problem and
//! its simulated solution.
//!
//! # Domain Mappings
//!
//! | cpu-sched-sim | OS textbook | Gantt renderer |
//! |---------------|-------------|----------------|
//! | Job | Process burst | Bar |
//! | Processor | CPU core | Lane |
//! | ScheduleEntry | Dispatch record | Bar placement |
//! | SimulationResult | Schedule | Chart data |

mod job;
mod processor;
mod schedule;

pub use job::{job_label, Job};
pub use processor::{processor_label, Processor};
pub use schedule::{ScheduleEntry, SimulationResult};
