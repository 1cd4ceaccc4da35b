//! Processor pool and the shared placement policy.
//!
//! # Placement
//! A dispatched job goes to the processor with the smallest
//! `available_at`; ties go to the lowest index. The job starts at
//! `max(available_at, arrival_time)` and the processor is busy until
//! `start + burst`.

use crate::error::SimulationError;
use crate::models::{job_label, Job, Processor, ScheduleEntry};

/// N identical processors and their next-free times.
///
/// Always holds at least one processor.
#[derive(Debug, Clone)]
pub struct ProcessorPool {
    processors: Vec<Processor>,
}

impl ProcessorPool {
    /// Creates `count` idle processors.
    ///
    /// # Errors
    /// `InvalidConfiguration` when `count` is zero.
    pub fn new(count: usize) -> Result<Self, SimulationError> {
        if count == 0 {
            return Err(SimulationError::InvalidConfiguration { processor_count: 0 });
        }
        Ok(Self {
            processors: (0..count).map(Processor::new).collect(),
        })
    }

    /// Number of processors.
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Whether the pool has no processors.
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Processor state, indexed by processor id.
    pub fn processors(&self) -> &[Processor] {
        &self.processors
    }

    /// Earliest time any processor becomes free.
    pub fn earliest_available(&self) -> i64 {
        self.processors[self.select()].available_at
    }

    /// Places the job at `job_index` and returns its schedule entry.
    pub fn dispatch(&mut self, job_index: usize, job: &Job) -> ScheduleEntry {
        let chosen = self.select();
        let processor = &mut self.processors[chosen];

        let start_time = processor.available_at.max(job.arrival_time);
        let end_time = job.end_time(start_time);

        processor.available_at = end_time;

        log::trace!(
            "dispatch {} -> {} [{start_time}, {end_time})",
            job_label(job_index),
            processor.label()
        );

        ScheduleEntry {
            job_index,
            job_label: job_label(job_index),
            processor: chosen,
            processor_label: processor.label(),
            arrival_time: job.arrival_time,
            burst_time: job.burst_time,
            start_time,
            end_time,
        }
    }

    /// Index of the processor with the earliest availability.
    ///
    /// Strict `<` keeps the lowest index on ties.
    fn select(&self) -> usize {
        let mut best = 0;
        for (i, processor) in self.processors.iter().enumerate().skip(1) {
            if processor.available_at < self.processors[best].available_at {
                best = i;
            }
        }
        best
    }
}
