//! A validated scheduling problem.

use super::{Fee, StationId, Task};

/// An undirected link between two stations with a travel fee.
///
/// Several connections may join the same pair; only the cheapest matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    /// One endpoint.
    pub a: StationId,
    /// The other endpoint.
    pub b: StationId,
    /// Cost of travelling in either direction.
    pub fee: Fee,
}

impl Connection {
    /// Create a new connection.
    pub fn new(a: StationId, b: StationId, fee: Fee) -> Self {
        Self { a, b, fee }
    }

    /// Whether both endpoints are the same station.
    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}

/// Everything the planner needs for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// Where the day starts and ends.
    pub start: StationId,
    /// Candidate tasks.
    pub tasks: Vec<Task>,
    /// The subway network.
    pub connections: Vec<Connection>,
}

impl Problem {
    /// Create a new problem.
    pub fn new(start: StationId, tasks: Vec<Task>, connections: Vec<Connection>) -> Self {
        Self {
            start,
            tasks,
            connections,
        }
    }

    /// Every station the problem mentions, with repeats.
    ///
    /// Includes the start station, each task's station and both endpoints
    /// of every connection.
    pub fn stations(&self) -> impl Iterator<Item = StationId> + '_ {
        std::iter::once(self.start)
            .chain(self.tasks.iter().map(|t| t.station))
            .chain(self.connections.iter().flat_map(|c| [c.a, c.b]))
    }

    /// Sum of all task scores, or `None` if it does not fit in a `u64`.
    ///
    /// Any chain of tasks scores at most this much, so when this is `Some`
    /// score arithmetic in the planner cannot overflow.
    pub fn total_score(&self) -> Option<u64> {
        self.tasks
            .iter()
            .try_fold(0u64, |acc, t| acc.checked_add(t.score))
    }
}
