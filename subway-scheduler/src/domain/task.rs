//! Tasks and their time windows.

use std::fmt;

use super::StationId;

/// Error returned when a window ends before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid time window [{start}, {end}): end is before start")]
pub struct InvalidWindow {
    start: i64,
    end: i64,
}

/// A half-open time interval `[start, end)`.
///
/// Two windows are compatible when one ends no later than the other starts,
/// so back-to-back windows sharing an endpoint do not overlap.
///
/// # Examples
///
/// ```
/// use subway_scheduler::domain::TimeWindow;
///
/// let morning = TimeWindow::new(0, 10).unwrap();
/// let noon = TimeWindow::new(10, 20).unwrap();
/// assert!(morning.precedes(&noon));
/// assert!(!noon.precedes(&morning));
///
/// assert!(TimeWindow::new(5, 4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    start: i64,
    end: i64,
}

impl TimeWindow {
    /// Create a window, requiring `end >= start`.
    pub fn new(start: i64, end: i64) -> Result<Self, InvalidWindow> {
        if end < start {
            return Err(InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Inclusive start.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Exclusive end.
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Whether this window finishes no later than `other` begins.
    pub fn precedes(&self, other: &TimeWindow) -> bool {
        self.end <= other.start
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// A scored unit of work performed at one station during a time window.
///
/// Names identify tasks in the output; uniqueness is not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Name reported in the schedule.
    pub name: String,
    /// When the task runs.
    pub window: TimeWindow,
    /// Where the task runs.
    pub station: StationId,
    /// Reward for completing the task.
    pub score: u64,
}

impl Task {
    /// Create a new task.
    pub fn new(name: impl Into<String>, window: TimeWindow, station: StationId, score: u64) -> Self {
        Self {
            name: name.into(),
            window,
            station,
            score,
        }
    }

    /// Whether this task can be completed before `other` starts.
    pub fn precedes(&self, other: &Task) -> bool {
        self.window.precedes(&other.window)
    }
}
