//! Schedule (simulation output) model.
//!
//! A simulation result is the ordered list of dispatch decisions plus the
//! aggregate turnaround metric. Entries are fresh records built during a
//! run; they never alias the caller's jobs.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::dispatching::Algorithm;

/// One row of the output timeline: a job placed on a processor.
///
/// Serialized in camelCase (`jobLabel`, `startTime`, `endTime`,
/// `processorLabel`, ...) for timeline renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Position of the job in the caller's input order.
    pub job_index: usize,
    /// `"J" + (job_index + 1)`.
    pub job_label: String,
    /// Zero-based processor index.
    pub processor: usize,
    /// `"CPU " + (processor + 1)`.
    pub processor_label: String,
    /// Copied from the input job.
    pub arrival_time: i64,
    /// Copied from the input job.
    pub burst_time: i64,
    /// Dispatch time.
    pub start_time: i64,
    /// `start_time + burst_time`.
    pub end_time: i64,
}

impl ScheduleEntry {
    /// Elapsed time from arrival to completion.
    #[inline]
    pub fn turnaround_time(&self) -> i64 {
        self.end_time - self.arrival_time
    }

    /// Time spent eligible but not running.
    #[inline]
    pub fn waiting_time(&self) -> i64 {
        self.start_time - self.arrival_time
    }

    /// Whether two entries occupy overlapping `[start, end)` intervals.
    pub fn overlaps(&self, other: &ScheduleEntry) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}

/// The complete output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Discipline that produced this schedule.
    pub algorithm: Algorithm,
    /// Number of processors simulated.
    pub processor_count: usize,
    /// One entry per input job, in dispatch order.
    pub entries: Vec<ScheduleEntry>,
    /// Mean turnaround across all jobs; 0 when there are no jobs.
    pub average_turnaround_time: f64,
}

impl SimulationResult {
    /// Assembles a result from dispatched entries and computes the average.
    pub fn new(algorithm: Algorithm, processor_count: usize, entries: Vec<ScheduleEntry>) -> Self {
        let average_turnaround_time = if entries.is_empty() {
            0.0
        } else {
            // Summed wide: each turnaround fits in i64, their total may not.
            let total: i128 = entries
                .iter()
                .map(|e| i128::from(e.turnaround_time()))
                .sum();
            total as f64 / entries.len() as f64
        };

        Self {
            algorithm,
            processor_count,
            entries,
            average_turnaround_time,
        }
    }

    /// Number of scheduled jobs.
    pub fn job_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether no jobs were scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Latest completion time across all entries.
    pub fn makespan(&self) -> i64 {
        self.entries.iter().map(|e| e.end_time).max().unwrap_or(0)
    }

    /// Finds the entry for the job at `job_index` in input order.
    pub fn entry_for_job(&self, job_index: usize) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.job_index == job_index)
    }

    /// Returns all entries run on a given processor, in dispatch order.
    pub fn entries_for_processor(&self, processor: usize) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.processor == processor)
            .collect()
    }

    /// Job labels in dispatch order.
    pub fn dispatch_order(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.job_label.as_str()).collect()
    }

    /// Entries grouped per processor and sorted by start time.
    ///
    /// Every processor appears, including ones that ran nothing, so a
    /// Gantt renderer gets one lane per CPU.
    pub fn lanes(&self) -> BTreeMap<usize, Vec<&ScheduleEntry>> {
        let mut lanes: BTreeMap<usize, Vec<&ScheduleEntry>> =
            (0..self.processor_count).map(|p| (p, Vec::new())).collect();
        for entry in &self.entries {
            lanes.entry(entry.processor).or_default().push(entry);
        }
        for lane in lanes.values_mut() {
            lane.sort_by_key(|e| e.start_time);
        }
        lanes
    }
}
