//! Non-preemptive CPU scheduling simulator.
//!
//! Simulates First-Come-First-Served and Shortest-Job-First dispatching
//! of a finite job set across N identical processors, producing per-job
//! timing, a Gantt-ready timeline, and average turnaround time.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `Processor`, `ScheduleEntry`,
//!   `SimulationResult`
//! - **`dispatching`**: `Algorithm` selector, dispatching rules, ready
//!   queue, processor pool (placement policy)
//! - **`scheduler`**: `Simulator`, `run`, `SimulationRequest`, `ScheduleKpi`
//! - **`validation`**: Input checks (burst, arrival, processor count)
//! - **`workload`**: Seeded random job sets
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::dispatching::Algorithm;
//! use cpu_sched_sim::models::Job;
//! use cpu_sched_sim::scheduler::run;
//!
//! let jobs = vec![Job::new(0, 4), Job::new(0, 2), Job::new(1, 6)];
//! let result = run(&jobs, 2, Algorithm::Fcfs).unwrap();
//!
//! let j3 = result.entry_for_job(2).unwrap();
//! assert_eq!(j3.processor_label, "CPU 2");
//! assert_eq!((j3.start_time, j3.end_time), (2, 8));
//! ```
//!
//! # Architecture
//!
//! The simulator is pure, synchronous, in-memory computation. A run
//! borrows the caller's jobs, never mutates them, and shares no state
//! with other runs, so independent runs may execute in parallel.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use dispatching::Algorithm;
pub use error::{InvalidJobReason, SimulationError};
pub use models::{Job, ScheduleEntry, SimulationResult};
pub use scheduler::{run, Simulator};
