//! Built-in dispatching rules.
//!
//! # Key Convention
//! All rules return lower keys for jobs that should be dispatched first,
//! and end every key with the input index so ties resolve to input order.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Smith (1956), SPT is optimal for mean flow time on a single machine

use super::{DispatchKey, DispatchingRule};
use crate::models::Job;

/// First-Come-First-Served.
///
/// Orders by arrival time. Jobs arriving together keep their input order.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DispatchingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn key(&self, job: &Job, index: usize) -> DispatchKey {
        (job.arrival_time, 0, index)
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Shortest Job First.
///
/// Orders by burst time, then arrival time, then input index. Only
/// meaningful over jobs that have already arrived; the scheduler keeps
/// not-yet-arrived jobs out of the ready queue.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchingRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, job: &Job, index: usize) -> DispatchKey {
        (job.burst_time, job.arrival_time, index)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First (non-preemptive)"
    }
}
