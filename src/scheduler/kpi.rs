//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling performance indicators from a
//! completed simulation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest completion time |
//! | Avg Turnaround | Mean of completion - arrival |
//! | Max Turnaround | Largest single turnaround |
//! | Avg Waiting | Mean of start - arrival |
//! | Utilization | Busy time / makespan, per processor |
//! | Throughput | Jobs completed per time unit over the makespan |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use crate::models::{ScheduleEntry, SimulationResult};

/// Simulation performance indicators.
///
/// All time values are in simulation time units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Makespan: latest completion time.
    pub makespan: i64,
    /// Mean turnaround across all jobs.
    pub avg_turnaround: f64,
    /// Maximum turnaround of any single job.
    pub max_turnaround: i64,
    /// Mean waiting time (start - arrival).
    pub avg_waiting: f64,
    /// Per-processor utilization (0.0..1.0), indexed by processor.
    pub utilization_by_processor: Vec<f64>,
    /// Average processor utilization (0.0..1.0).
    pub avg_utilization: f64,
    /// Jobs per time unit over the makespan.
    pub throughput: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a simulation result.
    ///
    /// Every ratio is 0 for an empty schedule.
    pub fn calculate(result: &SimulationResult) -> Self {
        let makespan = result.makespan();
        let count = result.job_count();

        let max_turnaround = result
            .entries
            .iter()
            .map(ScheduleEntry::turnaround_time)
            .max()
            .unwrap_or(0);

        let avg_waiting = if count == 0 {
            0.0
        } else {
            let total: i128 = result
                .entries
                .iter()
                .map(|e| i128::from(e.waiting_time()))
                .sum();
            total as f64 / count as f64
        };

        // Utilization
        let mut busy = vec![0i64; result.processor_count];
        for entry in &result.entries {
            if let Some(slot) = busy.get_mut(entry.processor) {
                *slot += entry.burst_time;
            }
        }
        let utilization_by_processor: Vec<f64> = if makespan <= 0 {
            vec![0.0; result.processor_count]
        } else {
            busy.iter().map(|&b| b as f64 / makespan as f64).collect()
        };
        let avg_utilization = if utilization_by_processor.is_empty() {
            0.0
        } else {
            utilization_by_processor.iter().sum::<f64>() / utilization_by_processor.len() as f64
        };

        let throughput = if makespan <= 0 {
            0.0
        } else {
            count as f64 / makespan as f64
        };

        Self {
            makespan,
            avg_turnaround: result.average_turnaround_time,
            max_turnaround,
            avg_waiting,
            utilization_by_processor,
            avg_utilization,
            throughput,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_turnaround: i64, min_utilization: f64) -> bool {
        self.max_turnaround <= max_turnaround && self.avg_utilization >= min_utilization
    }
}
