//! End-to-end request handling.
//!
//! Validates a request, resolves the station network and runs the
//! optimizer. Everything here is synchronous and owns its working data, so
//! independent requests can be solved from different threads.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::network::{StationIndex, StationNetwork};
use crate::planner::{PlanError, PlannerConfig, optimize};
use crate::wire::{InputError, ScheduleRequest, ScheduleResponse, convert_request};

/// Why a request could not be solved.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    /// Reading the request failed
    #[error("failed to read request: {0}")]
    Io(#[from] std::io::Error),

    /// Request is not valid JSON or has the wrong shape
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),

    /// Request is well-formed but some values are invalid
    #[error("invalid request: {}", join_errors(.0))]
    InvalidInput(Vec<InputError>),

    /// Too many tasks
    #[error("request has {count} tasks, limit is {limit}")]
    TooManyTasks { count: usize, limit: usize },

    /// Too many distinct stations
    #[error("request references {count} stations, limit is {limit}")]
    TooManyStations { count: usize, limit: usize },

    /// Scores add up to more than can be represented
    #[error("total task score does not fit in 64 bits")]
    ScoreOverflow,

    /// Optimizer rejected its input
    #[error(transparent)]
    Plan(#[from] PlanError),
}

fn join_errors(errors: &[InputError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Solve a parsed request.
///
/// A request without tasks always yields the empty schedule. Otherwise the
/// request is validated, checked against the limits in `config` and
/// planned.
///
/// # Example
///
/// ```
/// use subway_scheduler::planner::PlannerConfig;
/// use subway_scheduler::solve::solve_json;
///
/// let response = solve_json(
///     r#"{
///         "tasks": [{"name": "A", "start": 0, "end": 10, "station": 1, "score": 5}],
///         "subway": [{"connection": [0, 1], "fee": 10}],
///         "starting_station": 0
///     }"#,
///     &PlannerConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(response.max_score, 5);
/// assert_eq!(response.min_fee.value(), 20.0);
/// assert_eq!(response.schedule, vec!["A"]);
/// ```
pub fn solve(
    request: &ScheduleRequest,
    config: &PlannerConfig,
) -> Result<ScheduleResponse, SolveError> {
    if request.tasks.is_empty() {
        debug!("No tasks, returning empty schedule");
        return Ok(ScheduleResponse::empty());
    }

    if let Some(limit) = config.max_tasks.filter(|&limit| request.tasks.len() > limit) {
        return Err(SolveError::TooManyTasks {
            count: request.tasks.len(),
            limit,
        });
    }

    let problem = convert_request(request).map_err(SolveError::InvalidInput)?;
    if problem.total_score().is_none() {
        return Err(SolveError::ScoreOverflow);
    }

    let index = StationIndex::build(problem.stations());
    if let Some(limit) = config.max_stations.filter(|&limit| index.len() > limit) {
        return Err(SolveError::TooManyStations {
            count: index.len(),
            limit,
        });
    }

    let network = StationNetwork::resolve(index, &problem.connections);

    debug!(
        tasks = problem.tasks.len(),
        connections = problem.connections.len(),
        stations = network.index().len(),
        start = %problem.start,
        "Station network ready"
    );

    let schedule = optimize(&problem.tasks, &network, problem.start)?;

    info!(
        max_score = schedule.max_score,
        min_fee = %schedule.min_fee,
        chosen = schedule.tasks.len(),
        "Schedule computed"
    );

    Ok(ScheduleResponse::from(schedule))
}

/// Parse and solve a JSON request.
pub fn solve_json(input: &str, config: &PlannerConfig) -> Result<ScheduleResponse, SolveError> {
    let request: ScheduleRequest = serde_json::from_str(input)?;
    solve(&request, config)
}

/// Read a request from a file, or from stdin when `path` is `None`.
pub fn load_request(path: Option<&Path>) -> Result<ScheduleRequest, SolveError> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Reading request file");
            read_request(std::fs::File::open(path)?)
        }
        None => {
            debug!("Reading request from stdin");
            read_request(std::io::stdin().lock())
        }
    }
}

/// Read a whole request document from `reader`.
pub fn read_request(mut reader: impl Read) -> Result<ScheduleRequest, SolveError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn solve_value(value: serde_json::Value) -> Result<serde_json::Value, SolveError> {
        let response = solve_json(&value.to_string(), &PlannerConfig::default())?;
        Ok(serde_json::to_value(response).unwrap())
    }

    #[test]
    fn single_task_scenario() {
        let output = solve_value(json!({
            "tasks": [{ "name": "A", "start": 0, "end": 10, "station": 1, "score": 5 }],
            "subway": [{ "connection": [0, 1], "fee": 10 }],
            "starting_station": 0
        }))
        .unwrap();

        assert_eq!(
            output,
            json!({ "max_score": 5, "min_fee": 20, "schedule": ["A"] })
        );
    }

    #[test]
    fn empty_tasks_scenario() {
        let output = solve_value(json!({
            "tasks": [],
            "subway": [{ "connection": [0, 1], "fee": 10 }],
            "starting_station": 0
        }))
        .unwrap();

        assert_eq!(
            output,
            json!({ "max_score": 0, "min_fee": 0, "schedule": [] })
        );
    }

    #[test]
    fn multi_task_day() {
        // Line 0 - 1 - 2 - 3 with a pricey shortcut 0 - 3.
        let output = solve_value(json!({
            "tasks": [
                { "name": "D", "start": 30, "end": 40, "station": 3, "score": 4 },
                { "name": "A", "start": 0, "end": 10, "station": 1, "score": 2 },
                { "name": "X", "start": 5, "end": 25, "station": 2, "score": 3 },
                { "name": "B", "start": 10, "end": 20, "station": 2, "score": 2 },
                { "name": "C", "start": 20, "end": 30, "station": 2, "score": 1 }
            ],
            "subway": [
                { "connection": [0, 1], "fee": 1 },
                { "connection": [1, 2], "fee": 2 },
                { "connection": [2, 3], "fee": 3 },
                { "connection": [0, 3], "fee": 100 }
            ],
            "starting_station": 0
        }))
        .unwrap();

        // A, B, C, D: 0->1 (1), 1->2 (2), 2->2 (0), 2->3 (3), 3->0 (6)
        assert_eq!(
            output,
            json!({ "max_score": 9, "min_fee": 12, "schedule": ["A", "B", "C", "D"] })
        );
    }

    #[test]
    fn fractional_fee_stays_fractional() {
        let output = solve_value(json!({
            "tasks": [{ "name": "A", "start": 0, "end": 1, "station": 1, "score": 1 }],
            "subway": [{ "connection": [1, 0], "fee": 1.25 }],
            "starting_station": 0
        }))
        .unwrap();

        assert_eq!(output["min_fee"], json!(2.5));
    }

    #[test]
    fn no_tasks_with_many_stations_is_empty() {
        let subway: Vec<_> = (0..=2000)
            .map(|i| json!({ "connection": [i, i + 1], "fee": 1 }))
            .collect();
        let output = solve_value(json!({
            "tasks": [],
            "subway": subway,
            "starting_station": 0
        }))
        .unwrap();

        assert_eq!(
            output,
            json!({ "max_score": 0, "min_fee": 0, "schedule": [] })
        );
    }

    #[test]
    fn no_tasks_skips_limits() {
        let config = PlannerConfig::default()
            .with_max_tasks(0)
            .with_max_stations(1);
        let request: ScheduleRequest = serde_json::from_value(json!({
            "subway": [{ "connection": [1, 2], "fee": 1 }],
            "starting_station": 0
        }))
        .unwrap();

        assert_eq!(solve(&request, &config).unwrap(), ScheduleResponse::empty());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = solve_json("{not json", &PlannerConfig::default()).unwrap_err();
        assert!(matches!(err, SolveError::Json(_)));
    }

    #[test]
    fn missing_starting_station_is_rejected() {
        let err = solve_value(json!({ "tasks": [] })).unwrap_err();
        assert!(matches!(err, SolveError::Json(_)));
        assert!(err.to_string().contains("starting_station"));
    }

    #[test]
    fn invalid_values_are_reported_together() {
        let err = solve_value(json!({
            "tasks": [{ "name": "A", "start": 5, "end": 1, "station": 0, "score": -1 }],
            "subway": [{ "connection": [0, 1], "fee": -3 }],
            "starting_station": 0
        }))
        .unwrap_err();

        match &err {
            SolveError::InvalidInput(errors) => assert_eq!(errors.len(), 3),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("invalid request: task 0 (A): "));
    }

    #[test]
    fn task_limit() {
        let config = PlannerConfig::default().with_max_tasks(1);
        let request: ScheduleRequest = serde_json::from_value(json!({
            "tasks": [
                { "name": "A", "start": 0, "end": 1, "station": 0, "score": 1 },
                { "name": "B", "start": 1, "end": 2, "station": 0, "score": 1 }
            ],
            "starting_station": 0
        }))
        .unwrap();

        let err = solve(&request, &config).unwrap_err();
        assert_eq!(err.to_string(), "request has 2 tasks, limit is 1");
    }

    #[test]
    fn station_limit() {
        let config = PlannerConfig::default().with_max_stations(2);
        let request: ScheduleRequest = serde_json::from_value(json!({
            "tasks": [{ "name": "A", "start": 0, "end": 1, "station": 0, "score": 1 }],
            "subway": [{ "connection": [1, 2], "fee": 1 }],
            "starting_station": 0
        }))
        .unwrap();

        let err = solve(&request, &config).unwrap_err();
        assert!(matches!(
            err,
            SolveError::TooManyStations { count: 3, limit: 2 }
        ));
    }

    #[test]
    fn score_overflow() {
        let err = solve_value(json!({
            "tasks": [
                { "name": "A", "start": 0, "end": 1, "station": 0, "score": i64::MAX },
                { "name": "B", "start": 1, "end": 2, "station": 0, "score": i64::MAX },
                { "name": "C", "start": 2, "end": 3, "station": 0, "score": i64::MAX }
            ],
            "starting_station": 0
        }))
        .unwrap_err();

        assert!(matches!(err, SolveError::ScoreOverflow));
    }

    #[test]
    fn repeated_solves_are_identical() {
        let input = json!({
            "tasks": [
                { "name": "A", "start": 0, "end": 10, "station": 1, "score": 5 },
                { "name": "B", "start": 0, "end": 10, "station": 2, "score": 5 }
            ],
            "subway": [
                { "connection": [0, 1], "fee": 3 },
                { "connection": [0, 2], "fee": 3 }
            ],
            "starting_station": 0
        });

        let first = solve_value(input.clone()).unwrap();
        let second = solve_value(input).unwrap();
        assert_eq!(first, second);
        assert_eq!(first["schedule"], json!(["A"]));
    }

    #[test]
    fn load_request_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"tasks": [{{"name": "A", "start": 0, "end": 1, "station": 2, "score": 3}}], "starting_station": 2}}"#
        )
        .unwrap();

        let request = load_request(Some(file.path())).unwrap();
        assert_eq!(request.starting_station, 2);
        assert_eq!(request.tasks.len(), 1);

        let response = solve(&request, &PlannerConfig::default()).unwrap();
        assert_eq!(response.schedule, vec!["A"]);
    }

    #[test]
    fn read_request_from_reader() {
        let input = br#"{"tasks": [], "starting_station": 9}"#;
        let request = read_request(&input[..]).unwrap();
        assert_eq!(request.starting_station, 9);
        assert!(request.tasks.is_empty());
    }

    #[test]
    fn read_request_rejects_garbage() {
        let err = read_request(&b"tasks: []"[..]).unwrap_err();
        assert!(matches!(err, SolveError::Json(_)));
    }

    #[test]
    fn load_request_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_request(Some(dir.path().join("absent.json").as_path())).unwrap_err();
        assert!(matches!(err, SolveError::Io(_)));
    }
}
