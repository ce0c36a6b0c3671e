//! The optimizer's answer.

use crate::domain::{Fee, Task};

/// The best set of tasks for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// Total score of the chosen tasks.
    pub max_score: u64,

    /// Cheapest round trip achieving `max_score`, including the return leg.
    pub min_fee: Fee,

    /// Chosen tasks ordered by start, then end, then name.
    pub tasks: Vec<Task>,
}

impl Schedule {
    /// The empty schedule: no tasks, no score, no fee.
    pub fn empty() -> Self {
        Self {
            max_score: 0,
            min_fee: Fee::ZERO,
            tasks: Vec::new(),
        }
    }

    /// Names of the chosen tasks, in schedule order.
    pub fn names(&self) -> Vec<String> {
        self.tasks.iter().map(|t| t.name.clone()).collect()
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::empty()
    }
}
