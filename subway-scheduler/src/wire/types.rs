//! Request and response DTOs.
//!
//! These types map directly to the JSON exchanged with callers. They carry
//! raw primitives; validation happens in
//! [`convert_request`](super::convert_request).

use serde::{Deserialize, Serialize};

use crate::domain::Fee;
use crate::planner::Schedule;

/// A scheduling request.
///
/// `tasks` and `subway` may be omitted and default to empty;
/// `starting_station` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleRequest {
    /// Candidate tasks.
    #[serde(default)]
    pub tasks: Vec<TaskDto>,

    /// Subway connections.
    #[serde(default)]
    pub subway: Vec<ConnectionDto>,

    /// Station the day starts and ends at.
    pub starting_station: i64,
}

/// A task as submitted.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskDto {
    /// Name reported in the schedule
    pub name: String,

    /// Start time (inclusive)
    pub start: i64,

    /// End time (exclusive)
    pub end: i64,

    /// Station identifier
    pub station: i64,

    /// Reward for doing the task
    pub score: i64,
}

/// A subway connection as submitted.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionDto {
    /// The two stations joined, in either order
    pub connection: [i64; 2],

    /// Fee for travelling between them
    pub fee: f64,
}

/// Response for a scheduling request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleResponse {
    /// Total score of the chosen tasks
    pub max_score: u64,

    /// Cheapest round-trip fee achieving `max_score`
    pub min_fee: Fee,

    /// Chosen task names, by start time
    pub schedule: Vec<String>,
}

impl ScheduleResponse {
    /// The response for an empty schedule.
    pub fn empty() -> Self {
        Self::from(Schedule::empty())
    }
}

impl From<Schedule> for ScheduleResponse {
    fn from(schedule: Schedule) -> Self {
        Self {
            max_score: schedule.max_score,
            min_fee: schedule.min_fee,
            schedule: schedule.names(),
        }
    }
}
