//! First-Come-First-Served dispatch.
//!
//! # Algorithm
//! 1. Stable-sort job indices by arrival time.
//! 2. Dispatch each job in that order to the earliest-free processor.
//!
//! Dispatch order never depends on processor state, so no readiness
//! tracking is needed.
//!
//! # Complexity
//! O(n log n + n * p) where n=jobs, p=processors.

use crate::dispatching::{rules, DispatchingRule, ProcessorPool};
use crate::models::{Job, ScheduleEntry};

/// Dispatches every job in arrival order. Entries are in dispatch order.
pub(crate) fn schedule(jobs: &[Job], pool: &mut ProcessorPool) -> Vec<ScheduleEntry> {
    let mut order: Vec<usize> = (0..jobs.len()).collect();
    order.sort_by_key(|&i| rules::Fcfs.key(&jobs[i], i));

    order
        .into_iter()
        .map(|i| pool.dispatch(i, &jobs[i]))
        .collect()
}
