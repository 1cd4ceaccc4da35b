//! Input validation for simulation requests.
//!
//! Checks a job list and processor count before any dispatching happens.
//! Detects:
//! - Processor count below one
//! - Non-positive burst times
//! - Negative arrival times
//! - Job sets whose latest arrival plus total burst exceeds `i64::MAX`
//!   (every end time is bounded by that sum)
//!
//! An empty job list is valid.

use crate::error::{InvalidJobReason, SimulationError};
use crate::models::Job;

/// Validation result carrying every detected issue.
pub type ValidationResult = Result<(), Vec<SimulationError>>;

/// Validates the input for a simulation run.
///
/// Checks:
/// 1. `processor_count >= 1`
/// 2. For each job, in input order: `burst_time > 0`, then `arrival_time >= 0`
/// 3. `max(arrival) + sum(burst)` over the well-formed jobs fits in `i64`;
///    the first job that breaks the bound is reported once
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues,
/// configuration issues first.
pub fn validate_input(jobs: &[Job], processor_count: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if processor_count < 1 {
        errors.push(SimulationError::InvalidConfiguration { processor_count });
    }

    let mut max_arrival: i64 = 0;
    let mut burst_total: i64 = 0;
    let mut overflowed = false;

    for (index, job) in jobs.iter().enumerate() {
        let mut well_formed = true;
        if job.burst_time <= 0 {
            well_formed = false;
            errors.push(SimulationError::invalid_job(
                index,
                InvalidJobReason::NonPositiveBurst(job.burst_time),
            ));
        }
        if job.arrival_time < 0 {
            well_formed = false;
            errors.push(SimulationError::invalid_job(
                index,
                InvalidJobReason::NegativeArrival(job.arrival_time),
            ));
        }
        if !well_formed || overflowed {
            continue;
        }

        max_arrival = max_arrival.max(job.arrival_time);
        match burst_total
            .checked_add(job.burst_time)
            .filter(|total| max_arrival.checked_add(*total).is_some())
        {
            Some(total) => burst_total = total,
            None => {
                overflowed = true;
                errors.push(SimulationError::invalid_job(
                    index,
                    InvalidJobReason::TimeOverflow,
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Like [`validate_input`], but reports only the first issue.
pub fn check_input(jobs: &[Job], processor_count: usize) -> Result<(), SimulationError> {
    validate_input(jobs, processor_count).map_err(|mut errors| errors.swap_remove(0))
}
