//! Simulation entry points.
//!
//! # Contract
//! `run(jobs, processor_count, algorithm)` validates the whole request,
//! then dispatches every job and returns one [`ScheduleEntry`] per job.
//! Input is validated before anything is dispatched, so a rejected
//! request never yields a partial schedule.
//!
//! Jobs are only borrowed. Each run builds fresh output records, so
//! repeated or concurrent runs over the same job list are independent.
//!
//! [`ScheduleEntry`]: crate::models::ScheduleEntry

use serde::{Deserialize, Serialize};

use super::{fcfs, sjf};
use crate::dispatching::{Algorithm, ProcessorPool};
use crate::error::SimulationError;
use crate::models::{Job, SimulationResult};
use crate::validation::check_input;

/// Input container for one simulation.
///
/// Deserializes from `{"jobs": [{"arrivalTime", "burstTime"}], "processorCount", "algorithm"}`.
///
/// ```
/// use cpu_sched_sim::dispatching::Algorithm;
/// use cpu_sched_sim::scheduler::SimulationRequest;
///
/// let request = SimulationRequest::new(vec![(0, 5).into(), (1, 3).into()])
///     .with_processors(2)
///     .with_algorithm(Algorithm::Sjf);
/// assert_eq!(request.processor_count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Jobs in the caller's order; labels derive from this order.
    pub jobs: Vec<Job>,
    /// Number of identical processors (default: 1).
    #[serde(default = "default_processor_count")]
    pub processor_count: usize,
    /// Discipline to simulate.
    pub algorithm: Algorithm,
}

fn default_processor_count() -> usize {
    1
}

impl SimulationRequest {
    /// Creates a single-processor FCFS request.
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs,
            processor_count: default_processor_count(),
            algorithm: Algorithm::default(),
        }
    }

    /// Builds a request from a raw algorithm selector.
    ///
    /// # Errors
    /// `UnknownAlgorithm` unless `selector` is `"FCFS"` or `"SJF"`.
    pub fn from_selector(
        jobs: Vec<Job>,
        processor_count: usize,
        selector: &str,
    ) -> Result<Self, SimulationError> {
        Ok(Self {
            jobs,
            processor_count,
            algorithm: selector.parse()?,
        })
    }

    /// Sets the processor count.
    pub fn with_processors(mut self, processor_count: usize) -> Self {
        self.processor_count = processor_count;
        self
    }

    /// Sets the discipline.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Non-preemptive multiprocessor scheduling simulator.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::dispatching::Algorithm;
/// use cpu_sched_sim::models::Job;
/// use cpu_sched_sim::scheduler::Simulator;
///
/// let jobs = vec![Job::new(0, 5), Job::new(1, 3), Job::new(2, 8)];
/// let result = Simulator::new(Algorithm::Fcfs).simulate(&jobs, 1).unwrap();
///
/// assert_eq!(result.dispatch_order(), vec!["J1", "J2", "J3"]);
/// assert!((result.average_turnaround_time - 26.0 / 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Simulator {
    algorithm: Algorithm,
}

impl Simulator {
    /// Creates a simulator for the given discipline.
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// Sets the discipline.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Discipline this simulator runs.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Simulates `jobs` on `processor_count` processors.
    ///
    /// # Errors
    /// - `InvalidConfiguration` if `processor_count < 1`
    /// - `InvalidJob` for the first job with a non-positive burst,
    ///   a negative arrival, or an end time past `i64::MAX`
    pub fn simulate(
        &self,
        jobs: &[Job],
        processor_count: usize,
    ) -> Result<SimulationResult, SimulationError> {
        if let Err(err) = check_input(jobs, processor_count) {
            log::warn!("rejected {} request: {err}", self.algorithm);
            return Err(err);
        }

        log::debug!(
            "simulating {} ({}) over {} jobs on {} processors",
            self.algorithm,
            self.algorithm.rule().description(),
            jobs.len(),
            processor_count
        );

        let mut pool = ProcessorPool::new(processor_count)?;
        let entries = match self.algorithm {
            Algorithm::Fcfs => fcfs::schedule(jobs, &mut pool),
            Algorithm::Sjf => sjf::schedule(jobs, &mut pool),
        };
        let result = SimulationResult::new(self.algorithm, processor_count, entries);

        log::debug!(
            "{} finished: makespan={}, avg turnaround={:.3}",
            self.algorithm,
            result.makespan(),
            result.average_turnaround_time
        );

        Ok(result)
    }

    /// Simulates a request, using the request's discipline.
    pub fn run_request(request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
        Self::new(request.algorithm).simulate(&request.jobs, request.processor_count)
    }

    /// Runs every discipline over the same jobs.
    pub fn compare(
        jobs: &[Job],
        processor_count: usize,
    ) -> Result<AlgorithmComparison, SimulationError> {
        Ok(AlgorithmComparison {
            fcfs: Self::new(Algorithm::Fcfs).simulate(jobs, processor_count)?,
            sjf: Self::new(Algorithm::Sjf).simulate(jobs, processor_count)?,
        })
    }
}

/// Simulates `jobs` on `processor_count` processors with `algorithm`.
///
/// Shorthand for `Simulator::new(algorithm).simulate(jobs, processor_count)`.
pub fn run(
    jobs: &[Job],
    processor_count: usize,
    algorithm: Algorithm,
) -> Result<SimulationResult, SimulationError> {
    Simulator::new(algorithm).simulate(jobs, processor_count)
}

/// Side-by-side results of both disciplines on one job set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmComparison {
    /// First-Come-First-Served result.
    pub fcfs: SimulationResult,
    /// Shortest-Job-First result.
    pub sjf: SimulationResult,
}

impl AlgorithmComparison {
    /// Discipline with the lower average turnaround (ties → FCFS).
    pub fn best(&self) -> Algorithm {
        if self.sjf.average_turnaround_time < self.fcfs.average_turnaround_time {
            Algorithm::Sjf
        } else {
            Algorithm::Fcfs
        }
    }

    /// `fcfs - sjf` average turnaround; positive when SJF is better.
    pub fn turnaround_gain(&self) -> f64 {
        self.fcfs.average_turnaround_time - self.sjf.average_turnaround_time
    }

    /// Result for a given discipline.
    pub fn result(&self, algorithm: Algorithm) -> &SimulationResult {
        match algorithm {
            Algorithm::Fcfs => &self.fcfs,
            Algorithm::Sjf => &self.sjf,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidJobReason;

    fn textbook_jobs() -> Vec<Job> {
        vec![Job::new(0, 5), Job::new(1, 3), Job::new(2, 8)]
    }

    fn reorder_jobs() -> Vec<Job> {
        vec![Job::new(0, 8), Job::new(1, 4), Job::new(2, 1)]
    }

    #[test]
    fn test_fcfs_textbook_scenario() {
        let result = run(&textbook_jobs(), 1, Algorithm::Fcfs).unwrap();
        let turnarounds: Vec<i64> = result.entries.iter().map(|e| e.turnaround_time()).collect();
        assert_eq!(turnarounds, vec![5, 7, 14]);
        assert!((result.average_turnaround_time - 26.0 / 3.0).abs() < 1e-10);
        assert_eq!(result.algorithm, Algorithm::Fcfs);
        assert_eq!(result.processor_count, 1);
    }

    #[test]
    fn test_sjf_textbook_scenario() {
        let result = run(&textbook_jobs(), 1, Algorithm::Sjf).unwrap();
        assert_eq!(result.dispatch_order(), vec!["J1", "J2", "J3"]);
        assert!((result.average_turnaround_time - 26.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_beats_fcfs_when_reordering() {
        let jobs = reorder_jobs();
        let fcfs = run(&jobs, 1, Algorithm::Fcfs).unwrap();
        let sjf = run(&jobs, 1, Algorithm::Sjf).unwrap();

        // FCFS: J1[0,8] J2[8,12] J3[12,13] → 8 + 11 + 11
        assert!((fcfs.average_turnaround_time - 10.0).abs() < 1e-10);
        // SJF: J1[0,8] J3[8,9] J2[9,13] → 8 + 12 + 7
        assert_eq!(sjf.dispatch_order(), vec!["J1", "J3", "J2"]);
        assert!((sjf.average_turnaround_time - 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_jobs() {
        for algorithm in Algorithm::ALL {
            let result = run(&[], 2, algorithm).unwrap();
            assert!(result.is_empty());
            assert!((result.average_turnaround_time - 0.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_single_job_average_is_its_turnaround() {
        let result = run(&[Job::new(4, 6)], 3, Algorithm::Sjf).unwrap();
        assert_eq!(result.entries[0].turnaround_time(), 6);
        assert!((result.average_turnaround_time - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_rejects_zero_processors() {
        let err = run(&textbook_jobs(), 0, Algorithm::Fcfs).unwrap_err();
        assert_eq!(err, SimulationError::InvalidConfiguration { processor_count: 0 });
    }

    #[test]
    fn test_rejects_whole_batch_on_bad_job() {
        let mut jobs = textbook_jobs();
        jobs.push(Job::default());
        let err = run(&jobs, 1, Algorithm::Sjf).unwrap_err();
        assert_eq!(
            err,
            SimulationError::invalid_job(3, InvalidJobReason::NonPositiveBurst(0))
        );
    }

    #[test]
    fn test_rejects_jobs_whose_end_time_would_overflow() {
        let err = run(&[Job::new(i64::MAX - 1, 5)], 1, Algorithm::Fcfs).unwrap_err();
        assert_eq!(
            err,
            SimulationError::invalid_job(0, InvalidJobReason::TimeOverflow)
        );

        let half = i64::MAX / 2;
        let jobs = [Job::new(0, half), Job::new(0, half), Job::new(0, 4)];
        for algorithm in Algorithm::ALL {
            let err = run(&jobs, 3, algorithm).unwrap_err();
            assert_eq!(
                err,
                SimulationError::invalid_job(2, InvalidJobReason::TimeOverflow)
            );
        }
    }

    #[test]
    fn test_average_of_large_turnarounds() {
        let third = i64::MAX / 3;
        let jobs = [Job::new(0, third), Job::new(0, third), Job::new(0, third)];
        let result = run(&jobs, 1, Algorithm::Sjf).unwrap();

        assert_eq!(result.makespan(), 3 * third);
        let expected = 2.0 * third as f64;
        assert!((result.average_turnaround_time - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let jobs = reorder_jobs();
        let snapshot = jobs.clone();
        let _ = run(&jobs, 2, Algorithm::Sjf).unwrap();
        let _ = run(&jobs, 2, Algorithm::Fcfs).unwrap();
        assert_eq!(jobs, snapshot);
    }

    #[test]
    fn test_rerun_with_other_algorithm_is_independent() {
        let jobs = reorder_jobs();
        let first = run(&jobs, 1, Algorithm::Sjf).unwrap();
        let _ = run(&jobs, 1, Algorithm::Fcfs).unwrap();
        let again = run(&jobs, 1, Algorithm::Sjf).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_simulator_builder() {
        let sim = Simulator::default().with_algorithm(Algorithm::Sjf);
        assert_eq!(sim.algorithm(), Algorithm::Sjf);
        let result = sim.simulate(&reorder_jobs(), 1).unwrap();
        assert_eq!(result.algorithm, Algorithm::Sjf);
    }

    #[test]
    fn test_run_request() {
        let request = SimulationRequest::new(vec![Job::new(0, 4), Job::new(0, 2), Job::new(1, 6)])
            .with_processors(2);
        let result = Simulator::run_request(&request).unwrap();
        let j3 = result.entry_for_job(2).unwrap();
        assert_eq!(j3.processor_label, "CPU 2");
        assert_eq!((j3.start_time, j3.end_time), (2, 8));
    }

    #[test]
    fn test_request_from_selector() {
        let request = SimulationRequest::from_selector(textbook_jobs(), 2, "SJF").unwrap();
        assert_eq!(request.algorithm, Algorithm::Sjf);

        let err = SimulationRequest::from_selector(textbook_jobs(), 2, "RR").unwrap_err();
        assert_eq!(err, SimulationError::unknown_algorithm("RR"));
    }

    #[test]
    fn test_request_deserialize() {
        let json = r#"{
            "jobs": [{"arrivalTime": 0, "burstTime": 5}, {"arrivalTime": 1, "burstTime": 3}],
            "processorCount": 2,
            "algorithm": "SJF"
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.jobs[1], Job::new(1, 3));
        assert_eq!(request.processor_count, 2);
        assert_eq!(request.algorithm, Algorithm::Sjf);
    }

    #[test]
    fn test_request_deserialize_defaults_to_one_processor() {
        let json = r#"{"jobs": [], "algorithm": "FCFS"}"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.processor_count, 1);
    }

    #[test]
    fn test_request_deserialize_unknown_algorithm() {
        let json = r#"{"jobs": [], "algorithm": "PRIORITY"}"#;
        assert!(serde_json::from_str::<SimulationRequest>(json).is_err());
    }

    #[test]
    fn test_result_wire_shape() {
        let result = run(&textbook_jobs(), 1, Algorithm::Fcfs).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        let first = &value["entries"][0];
        assert_eq!(first["jobLabel"], "J1");
        assert_eq!(first["startTime"], 0);
        assert_eq!(first["endTime"], 5);
        assert_eq!(first["processorLabel"], "CPU 1");
        assert_eq!(value["algorithm"], "FCFS");
        assert!(value["averageTurnaroundTime"].is_f64());
    }

    #[test]
    fn test_compare() {
        let comparison = Simulator::compare(&reorder_jobs(), 1).unwrap();
        assert_eq!(comparison.best(), Algorithm::Sjf);
        assert!((comparison.turnaround_gain() - 1.0).abs() < 1e-10);
        assert_eq!(comparison.result(Algorithm::Fcfs).algorithm, Algorithm::Fcfs);
    }

    #[test]
    fn test_compare_tie_prefers_fcfs() {
        let comparison = Simulator::compare(&textbook_jobs(), 1).unwrap();
        assert_eq!(comparison.best(), Algorithm::Fcfs);
    }

    #[test]
    fn test_compare_propagates_errors() {
        assert!(Simulator::compare(&textbook_jobs(), 0).is_err());
    }
}
