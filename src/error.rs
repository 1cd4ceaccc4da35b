//! Error types for simulation requests.
//!
//! Every failure is detected before any job is dispatched, so a caller
//! either gets a complete schedule or one of these errors, never a
//! partial result. The enum is `#[non_exhaustive]`; match with a
//! fallback arm.

use std::fmt;

/// Why a single job was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidJobReason {
    /// Burst time was zero or negative.
    NonPositiveBurst(i64),
    /// Arrival time was negative.
    NegativeArrival(i64),
    /// Latest arrival plus total burst up to this job exceeds `i64::MAX`,
    /// so some end time would not be representable.
    TimeOverflow,
}

/// A rejected simulation request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimulationError {
    /// A job has a non-positive burst or a negative arrival.
    InvalidJob {
        /// Position of the job in the input.
        index: usize,
        reason: InvalidJobReason,
    },
    /// Fewer than one processor was requested.
    InvalidConfiguration { processor_count: usize },
    /// The algorithm selector is neither `"FCFS"` nor `"SJF"`.
    UnknownAlgorithm { name: String },
}

impl SimulationError {
    /// Creates an invalid-job error for the job at `index`.
    #[inline]
    pub fn invalid_job(index: usize, reason: InvalidJobReason) -> Self {
        Self::InvalidJob { index, reason }
    }

    /// Creates an unknown-algorithm error.
    #[inline]
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm { name: name.into() }
    }
}

impl fmt::Display for InvalidJobReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveBurst(burst) => {
                write!(f, "burst time must be positive, got {burst}")
            }
            Self::NegativeArrival(arrival) => {
                write!(f, "arrival time must not be negative, got {arrival}")
            }
            Self::TimeOverflow => {
                f.write_str("latest arrival plus total burst time overflows the time range")
            }
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJob { index, reason } => {
                write!(f, "invalid job J{}: {reason}", index + 1)
            }
            Self::InvalidConfiguration { processor_count } => write!(
                f,
                "invalid configuration: need at least 1 processor, got {processor_count}"
            ),
            Self::UnknownAlgorithm { name } => {
                write!(f, "unknown algorithm '{name}' (expected FCFS or SJF)")
            }
        }
    }
}

impl std::error::Error for SimulationError {}
