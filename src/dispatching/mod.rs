//! Dispatching rules, ready queue, and processor placement.
//!
//! A dispatching rule decides *which* job goes next; the processor pool
//! decides *where* it runs. Both disciplines share the same placement
//! policy and differ only in their rule.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::dispatching::{rules, Algorithm, DispatchingRule};
//! use cpu_sched_sim::models::Job;
//!
//! let algorithm: Algorithm = "SJF".parse().unwrap();
//! assert_eq!(algorithm, Algorithm::Sjf);
//!
//! let short = rules::Sjf.key(&Job::new(4, 1), 1);
//! let long = rules::Sjf.key(&Job::new(0, 9), 0);
//! assert!(short < long);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod pool;
mod queue;
pub mod rules;

pub use pool::ProcessorPool;
pub use queue::ReadyQueue;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::error::SimulationError;
use crate::models::Job;

/// Priority key produced by a dispatching rule.
///
/// Compared lexicographically; **lower key = dispatched first**. The last
/// component is always the job's input index, so keys are unique and
/// every ordering is total and reproducible.
pub type DispatchKey = (i64, i64, usize);

/// A dispatching rule that orders jobs for dispatch.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "FCFS", "SJF").
    fn name(&self) -> &'static str;

    /// Computes the dispatch key of the job at `index` in input order.
    fn key(&self, job: &Job, index: usize) -> DispatchKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Scheduling discipline selector.
///
/// Parses from and displays as exactly `"FCFS"` or `"SJF"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[default]
    Fcfs,
    /// Non-preemptive Shortest-Job-First.
    Sjf,
}

impl Algorithm {
    /// Every supported discipline.
    pub const ALL: [Algorithm; 2] = [Algorithm::Fcfs, Algorithm::Sjf];

    /// Canonical selector string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
        }
    }

    /// The dispatching rule backing this discipline.
    pub fn rule(&self) -> &'static dyn DispatchingRule {
        match self {
            Self::Fcfs => &rules::Fcfs,
            Self::Sjf => &rules::Sjf,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FCFS" => Ok(Self::Fcfs),
            "SJF" => Ok(Self::Sjf),
            other => Err(SimulationError::unknown_algorithm(other)),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = SimulationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Algorithm> for String {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.as_str().to_string()
    }
}
