//! Station graph resolution.
//!
//! Turns the raw list of stations and connections into a dense index and a
//! table of minimum travel fees between every pair of stations. The planner
//! only ever looks fees up in this table; it never walks the graph itself.

mod index;
mod matrix;

pub use index::StationIndex;
pub use matrix::DistanceMatrix;

use tracing::{debug, trace};

use crate::domain::{Connection, Problem, StationId, StationIdx};

/// A resolved station graph: dense index plus all-pairs minimum fees.
///
/// Built once per request and read-only afterwards.
#[derive(Debug, Clone)]
pub struct StationNetwork {
    index: StationIndex,
    distances: DistanceMatrix,
}

impl StationNetwork {
    /// Resolve shortest fees for the stations in `index`.
    ///
    /// Every connection endpoint must already be present in `index`;
    /// connections mentioning unknown stations are skipped.
    pub fn resolve(index: StationIndex, connections: &[Connection]) -> Self {
        let mut distances = DistanceMatrix::new(index.len());
        let mut applied = 0usize;

        for (idx, id) in index.iter() {
            trace!(%idx, %id, "Indexed station");
        }

        for connection in connections {
            if connection.is_self_loop() {
                trace!(station = %connection.a, "Ignoring self-loop connection");
                continue;
            }
            let (Some(a), Some(b)) = (index.index_of(connection.a), index.index_of(connection.b))
            else {
                debug!(
                    a = %connection.a,
                    b = %connection.b,
                    "Skipping connection with unindexed endpoint"
                );
                continue;
            };
            if distances.connect(a, b, connection.fee) {
                applied += 1;
            }
        }

        distances.relax();

        debug!(
            stations = index.len(),
            connections = connections.len(),
            applied,
            "Resolved station network"
        );

        Self { index, distances }
    }

    /// Index every station the problem references and resolve fees.
    pub fn for_problem(problem: &Problem) -> Self {
        Self::resolve(StationIndex::build(problem.stations()), &problem.connections)
    }

    /// The dense station index.
    pub fn index(&self) -> &StationIndex {
        &self.index
    }

    /// The all-pairs fee table.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Dense position of a station.
    pub fn index_of(&self, id: StationId) -> Option<StationIdx> {
        self.index.index_of(id)
    }

    /// Minimum fee between two stations by identifier.
    ///
    /// Stations the network has never seen are unreachable from everywhere,
    /// including themselves.
    #[cfg(test)]
    pub(crate) fn distance(&self, from: StationId, to: StationId) -> crate::domain::Distance {
        match (self.index.index_of(from), self.index.index_of(to)) {
            (Some(a), Some(b)) => self.distances.get(a, b),
            _ => crate::domain::Distance::Unreachable,
        }
    }
}
