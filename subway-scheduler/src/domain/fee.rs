//! Travel fees and reachability-aware distances.

use std::fmt;

use serde::{Serialize, Serializer};

/// Largest float for which every integer up to it is exactly representable.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Error returned when constructing an invalid [`Fee`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid fee: {reason}")]
pub struct InvalidFee {
    reason: &'static str,
}

/// A finite, non-negative travel fee.
///
/// Because NaN and infinities are rejected at construction, fees are totally
/// ordered and can implement `Eq` and `Ord`.
///
/// # Examples
///
/// ```
/// use subway_scheduler::domain::Fee;
///
/// let ten = Fee::new(10.0).unwrap();
/// assert_eq!(ten.value(), 10.0);
///
/// assert!(Fee::new(-1.0).is_err());
/// assert!(Fee::new(f64::INFINITY).is_err());
/// assert!(Fee::new(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Fee(f64);

impl Fee {
    /// The zero fee.
    pub const ZERO: Fee = Fee(0.0);

    /// Create a fee, rejecting negative and non-finite values.
    pub fn new(value: f64) -> Result<Self, InvalidFee> {
        if !value.is_finite() {
            return Err(InvalidFee {
                reason: "must be a finite number",
            });
        }
        if value < 0.0 {
            return Err(InvalidFee {
                reason: "must be non-negative",
            });
        }
        // Adding +0.0 folds -0.0 into +0.0.
        Ok(Fee(value + 0.0))
    }

    /// Returns the fee as a float.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Add two fees, returning `None` if the sum is no longer finite.
    pub fn checked_add(self, other: Fee) -> Option<Fee> {
        let sum = self.0 + other.0;
        sum.is_finite().then_some(Fee(sum))
    }

    /// The fee as an integer, if it has no fractional part.
    pub fn as_integer(self) -> Option<u64> {
        (self.0.fract() == 0.0 && self.0 <= MAX_EXACT_INTEGER).then_some(self.0 as u64)
    }
}

impl Eq for Fee {}

impl PartialOrd for Fee {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fee {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Debug for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fee({self})")
    }
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_integer() {
            Some(n) => write!(f, "{n}"),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Integral fees are written as JSON integers, everything else as floats.
impl Serialize for Fee {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_integer() {
            Some(n) => serializer.serialize_u64(n),
            None => serializer.serialize_f64(self.0),
        }
    }
}

/// Minimum cumulative fee between two stations, or no path at all.
///
/// `Unreachable` orders after every reachable fee, so `min` and `<` do the
/// right thing without special cases. There is no way to add a number to
/// `Unreachable` and get a reachable distance back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Distance {
    /// A path exists with this minimum total fee.
    Reachable(Fee),
    /// No sequence of connections joins the two stations.
    Unreachable,
}

impl Distance {
    /// Zero distance (a station to itself).
    pub const ZERO: Distance = Distance::Reachable(Fee::ZERO);

    /// Returns the fee if reachable.
    pub fn fee(self) -> Option<Fee> {
        match self {
            Distance::Reachable(fee) => Some(fee),
            Distance::Unreachable => None,
        }
    }

    /// Whether a path exists.
    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Reachable(_))
    }

    /// Chain two distances end to end.
    ///
    /// Unreachable if either side is, or if the sum overflows to infinity.
    pub fn then(self, next: Distance) -> Distance {
        match (self, next) {
            (Distance::Reachable(a), Distance::Reachable(b)) => a
                .checked_add(b)
                .map_or(Distance::Unreachable, Distance::Reachable),
            _ => Distance::Unreachable,
        }
    }
}

impl From<Fee> for Distance {
    fn from(fee: Fee) -> Self {
        Distance::Reachable(fee)
    }
}
