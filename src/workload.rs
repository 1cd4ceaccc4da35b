//! Random workload generation.
//!
//! Builds reproducible job sets for demos, benchmarks, and tests. The
//! same seed and settings always yield the same jobs.
//!
//! ```
//! use cpu_sched_sim::workload::WorkloadGenerator;
//!
//! let jobs = WorkloadGenerator::new(42)
//!     .with_job_count(5)
//!     .with_arrival_window(0, 10)
//!     .with_burst_range(1, 4)
//!     .generate();
//! assert_eq!(jobs.len(), 5);
//! assert!(jobs.iter().all(|j| j.burst_time >= 1));
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Job;

/// Seeded generator of valid job sets.
///
/// Bounds are inclusive. Burst bounds are clamped to at least 1 and
/// arrival bounds to at least 0, so every generated set passes validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    seed: u64,
    job_count: usize,
    arrival_min: i64,
    arrival_max: i64,
    burst_min: i64,
    burst_max: i64,
}

impl WorkloadGenerator {
    /// Creates a generator: 10 jobs, arrivals in `0..=20`, bursts in `1..=10`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            job_count: 10,
            arrival_min: 0,
            arrival_max: 20,
            burst_min: 1,
            burst_max: 10,
        }
    }

    /// Sets the number of jobs.
    pub fn with_job_count(mut self, job_count: usize) -> Self {
        self.job_count = job_count;
        self
    }

    /// Sets the inclusive arrival window.
    pub fn with_arrival_window(mut self, min: i64, max: i64) -> Self {
        self.arrival_min = min.max(0);
        self.arrival_max = max.max(self.arrival_min);
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst_min = min.max(1);
        self.burst_max = max.max(self.burst_min);
        self
    }

    /// Generates the job set.
    pub fn generate(&self) -> Vec<Job> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.job_count)
            .map(|_| {
                Job::new(
                    rng.random_range(self.arrival_min..=self.arrival_max),
                    rng.random_range(self.burst_min..=self.burst_max),
                )
            })
            .collect()
    }
}
