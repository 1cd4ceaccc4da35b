//! Processor model.
//!
//! Processors are identical, fungible execution units. A processor only
//! tracks when it next becomes free.

use serde::{Deserialize, Serialize};

/// One of N identical execution units, identified by index `0..N-1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Processor {
    /// Zero-based processor index.
    pub index: usize,
    /// Time at which the processor becomes free.
    pub available_at: i64,
}

impl Processor {
    /// Creates an idle processor free from t=0.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            available_at: 0,
        }
    }

    /// Display label (`"CPU 1"` for index 0).
    pub fn label(&self) -> String {
        processor_label(self.index)
    }
}

/// Display label for the processor at `index`.
pub fn processor_label(index: usize) -> String {
    format!("CPU {}", index + 1)
}
