//! All-pairs minimum fee table.
//!
//! Uses Floyd–Warshall over the dense station index. The graph is
//! undirected, so the finished matrix is symmetric.

use crate::domain::{Distance, Fee, StationIdx};

/// An n×n table of minimum cumulative fees.
///
/// Diagonal entries are zero. Entries with no connecting path are
/// [`Distance::Unreachable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    n: usize,
    /// Row-major cells.
    cells: Vec<Distance>,
}

impl DistanceMatrix {
    /// A matrix over `n` stations with no connections yet.
    pub fn new(n: usize) -> Self {
        let mut cells = vec![Distance::Unreachable; n * n];
        for i in 0..n {
            cells[i * n + i] = Distance::ZERO;
        }
        Self { n, cells }
    }

    /// Number of stations (rows).
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns true if the matrix covers no stations.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Minimum fee from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range for this matrix.
    pub fn get(&self, from: StationIdx, to: StationIdx) -> Distance {
        assert!(from.0 < self.n && to.0 < self.n, "station index out of range");
        self.cells[from.0 * self.n + to.0]
    }

    /// Record a direct connection, keeping the cheaper of old and new.
    ///
    /// Both directions are updated. Returns true if the entry improved.
    pub fn connect(&mut self, a: StationIdx, b: StationIdx, fee: Fee) -> bool {
        let candidate = Distance::Reachable(fee);
        if candidate >= self.get(a, b) {
            return false;
        }
        self.cells[a.0 * self.n + b.0] = candidate;
        self.cells[b.0 * self.n + a.0] = candidate;
        true
    }

    /// Relax every pair through every intermediate station.
    ///
    /// After this, each entry is the true shortest path fee over any
    /// number of hops. O(n³).
    pub fn relax(&mut self) {
        let n = self.n;
        for k in 0..n {
            for i in 0..n {
                let via = self.cells[i * n + k];
                if !via.is_reachable() {
                    continue;
                }
                for j in 0..n {
                    let candidate = via.then(self.cells[k * n + j]);
                    let cell = &mut self.cells[i * n + j];
                    if candidate < *cell {
                        *cell = candidate;
                    }
                }
            }
        }
    }
}
