//! Station identifier types.

use std::fmt;

/// An opaque station identifier as it appears in requests.
///
/// Identifiers are arbitrary integers. They are only compared, hashed and
/// sorted; the planner never does arithmetic on them.
///
/// # Examples
///
/// ```
/// use subway_scheduler::domain::StationId;
///
/// let a = StationId::new(7);
/// let b = StationId::new(-3);
/// assert!(b < a);
/// assert_eq!(a.get(), 7);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(i64);

impl StationId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        StationId(raw)
    }

    /// Returns the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for StationId {
    fn from(raw: i64) -> Self {
        StationId(raw)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dense zero-based position of a station in a [`StationIndex`].
///
/// Only meaningful together with the index that produced it.
///
/// [`StationIndex`]: crate::network::StationIndex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationIdx(pub usize);

impl fmt::Display for StationIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
