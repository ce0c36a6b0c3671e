//! Dense re-indexing of station identifiers.

use std::collections::HashMap;

use crate::domain::{StationId, StationIdx};

/// Bijection between referenced station identifiers and `0..n`.
///
/// Positions are assigned by ascending identifier, so the same set of
/// stations always produces the same index regardless of input order.
#[derive(Debug, Clone, Default)]
pub struct StationIndex {
    /// Sorted, deduplicated identifiers. Position = dense index.
    ids: Vec<StationId>,
    /// Reverse lookup.
    positions: HashMap<StationId, StationIdx>,
}

impl StationIndex {
    /// Build an index over the given stations. Duplicates are fine.
    ///
    /// # Example
    ///
    /// ```
    /// use subway_scheduler::domain::{StationId, StationIdx};
    /// use subway_scheduler::network::StationIndex;
    ///
    /// let index = StationIndex::build([30, 10, 20, 10].map(StationId::new));
    /// assert_eq!(index.len(), 3);
    /// assert_eq!(index.index_of(StationId::new(10)), Some(StationIdx(0)));
    /// assert_eq!(index.index_of(StationId::new(30)), Some(StationIdx(2)));
    /// ```
    pub fn build(stations: impl IntoIterator<Item = StationId>) -> Self {
        let mut ids: Vec<StationId> = stations.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();

        let positions = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, StationIdx(i)))
            .collect();

        Self { ids, positions }
    }

    /// Dense position of a station, if it was referenced.
    pub fn index_of(&self, id: StationId) -> Option<StationIdx> {
        self.positions.get(&id).copied()
    }

    /// Number of distinct stations.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if no stations were referenced.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over `(position, identifier)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (StationIdx, StationId)> + '_ {
        self.ids
            .iter()
            .enumerate()
            .map(|(i, id)| (StationIdx(i), *id))
    }
}
