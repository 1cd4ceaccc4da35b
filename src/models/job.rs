//! Job model.
//!
//! A job is a single CPU burst submitted at an arrival time. Jobs carry
//! only caller-supplied data; everything computed during a run lives in
//! [`ScheduleEntry`](super::ScheduleEntry), so a job list can be reused
//! across runs without stale results leaking between them.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A unit of work to schedule.
///
/// # Time Representation
/// All times are integer time units relative to t=0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Time at which the job becomes eligible to run.
    pub arrival_time: i64,
    /// Total uninterrupted CPU time the job needs.
    pub burst_time: i64,
}

impl Job {
    /// Creates a job arriving at `arrival_time` that needs `burst_time` units.
    pub fn new(arrival_time: i64, burst_time: i64) -> Self {
        Self {
            arrival_time,
            burst_time,
        }
    }

    /// Completion time if the job starts at `start_time`.
    #[inline]
    pub fn end_time(&self, start_time: i64) -> i64 {
        start_time + self.burst_time
    }
}

impl From<(i64, i64)> for Job {
    fn from((arrival_time, burst_time): (i64, i64)) -> Self {
        Self::new(arrival_time, burst_time)
    }
}

/// Display label for the job at `index` in the caller's input order.
///
/// Labels are 1-based: index 0 is `"J1"`.
pub fn job_label(index: usize) -> String {
    format!("J{}", index + 1)
}
