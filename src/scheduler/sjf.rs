//! Non-preemptive multiprocessor Shortest-Job-First dispatch.
//!
//! # Algorithm
//! Jobs move through three states: *pending* (not yet arrived, ordered by
//! arrival), *ready* (arrived, in a min-heap keyed by
//! `(burst, arrival, index)`), and *dispatched*. The decision clock is the
//! earliest time any processor becomes free.
//!
//! 1. Move every pending job with `arrival <= clock` into ready.
//! 2. If ready is non-empty, dispatch its shortest job to the
//!    earliest-free processor and reset the clock to the new floor.
//! 3. Otherwise, if jobs are still pending, fast-forward the clock to the
//!    next arrival and retry.
//! 4. Stop when pending and ready are both empty.
//!
//! A processor therefore always picks the shortest job that is eligible
//! when it frees up, never a globally shorter job that has not arrived.
//!
//! # Complexity
//! O(n log n + n * p) where n=jobs, p=processors.

use std::collections::VecDeque;

use crate::dispatching::{rules, DispatchingRule, ProcessorPool, ReadyQueue};
use crate::models::{Job, ScheduleEntry};

/// Dispatches every job shortest-eligible-first. Entries are in dispatch order.
pub(crate) fn schedule(jobs: &[Job], pool: &mut ProcessorPool) -> Vec<ScheduleEntry> {
    let mut by_arrival: Vec<usize> = (0..jobs.len()).collect();
    by_arrival.sort_by_key(|&i| rules::Fcfs.key(&jobs[i], i));
    let mut pending: VecDeque<usize> = by_arrival.into();

    let mut ready = ReadyQueue::new(&rules::Sjf);
    let mut entries = Vec::with_capacity(jobs.len());
    let mut clock = pool.earliest_available();

    loop {
        while let Some(&next) = pending.front() {
            if jobs[next].arrival_time > clock {
                break;
            }
            pending.pop_front();
            ready.push(next, &jobs[next]);
        }

        if let Some(index) = ready.pop() {
            entries.push(pool.dispatch(index, &jobs[index]));
            clock = pool.earliest_available();
        } else if let Some(&next) = pending.front() {
            let arrival = jobs[next].arrival_time;
            log::trace!("no eligible job at t={clock}, fast-forward to t={arrival}");
            clock = arrival;
        } else {
            break;
        }
    }

    entries
}
