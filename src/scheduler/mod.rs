//! Non-preemptive schedulers and KPI evaluation.
//!
//! Provides the FCFS and SJF simulators behind a single entry point and
//! schedule quality metrics.
//!
//! # Algorithm
//!
//! Both disciplines share one placement policy: the dispatched job goes
//! to the earliest-free processor (lowest index on ties) and starts at
//! `max(free time, arrival)`. They differ only in which job is dispatched
//! next. FCFS uses a fixed arrival-order pass; SJF tracks readiness
//! against an advancing clock.
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, turnaround, waiting time, processor
//! utilization, and throughput.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod fcfs;
mod kpi;
mod simulator;
mod sjf;


pub use kpi::ScheduleKpi;
pub use simulator::{run, AlgorithmComparison, SimulationRequest, Simulator};
