//! Conversion from request DTOs to domain types.
//!
//! Every item is checked and all problems are reported together, so a
//! caller fixing a request sees the full list in one round trip.

use crate::domain::{
    Connection, Fee, InvalidFee, InvalidWindow, Problem, StationId, Task, TimeWindow,
};

use super::types::{ConnectionDto, ScheduleRequest, TaskDto};

/// A problem with one item of a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// Task window ends before it starts
    #[error("task {index} ({name}): {source}")]
    InvalidWindow {
        index: usize,
        name: String,
        source: InvalidWindow,
    },

    /// Task score below zero
    #[error("task {index} ({name}): score must be non-negative, got {score}")]
    NegativeScore {
        index: usize,
        name: String,
        score: i64,
    },

    /// Connection fee negative or not finite
    #[error("connection {index}: {source}")]
    InvalidFee { index: usize, source: InvalidFee },
}

/// Convert a request into a validated [`Problem`].
///
/// Returns every problem found, in request order (tasks first).
pub fn convert_request(request: &ScheduleRequest) -> Result<Problem, Vec<InputError>> {
    let mut errors = Vec::new();

    let tasks: Vec<Task> = request
        .tasks
        .iter()
        .enumerate()
        .filter_map(|(index, dto)| {
            convert_task(index, dto)
                .map_err(|e| errors.extend(e))
                .ok()
        })
        .collect();

    let connections: Vec<Connection> = request
        .subway
        .iter()
        .enumerate()
        .filter_map(|(index, dto)| {
            convert_connection(index, dto)
                .map_err(|e| errors.push(e))
                .ok()
        })
        .collect();

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Problem::new(
        StationId::new(request.starting_station),
        tasks,
        connections,
    ))
}

/// Convert one task, reporting both window and score problems.
fn convert_task(index: usize, dto: &TaskDto) -> Result<Task, Vec<InputError>> {
    let window =
        TimeWindow::new(dto.start, dto.end).map_err(|source| InputError::InvalidWindow {
            index,
            name: dto.name.clone(),
            source,
        });
    let score = u64::try_from(dto.score).map_err(|_| InputError::NegativeScore {
        index,
        name: dto.name.clone(),
        score: dto.score,
    });

    match (window, score) {
        (Ok(window), Ok(score)) => Ok(Task::new(
            dto.name.clone(),
            window,
            StationId::new(dto.station),
            score,
        )),
        (window, score) => Err(window.err().into_iter().chain(score.err()).collect()),
    }
}

/// Convert one connection.
fn convert_connection(index: usize, dto: &ConnectionDto) -> Result<Connection, InputError> {
    let fee = Fee::new(dto.fee).map_err(|source| InputError::InvalidFee { index, source })?;
    let [a, b] = dto.connection;
    Ok(Connection::new(StationId::new(a), StationId::new(b), fee))
}
