//! Planner configuration.

/// Optional limits applied to requests before planning.
///
/// Distance resolution is cubic in the number of stations and the optimizer
/// quadratic in the number of tasks. Callers that accept untrusted input can
/// cap both; by default nothing is capped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Maximum number of tasks in one request.
    pub max_tasks: Option<usize>,

    /// Maximum number of distinct stations one request may reference.
    pub max_stations: Option<usize>,
}

impl PlannerConfig {
    /// Create a new configuration with the given limits.
    pub fn new(max_tasks: Option<usize>, max_stations: Option<usize>) -> Self {
        Self {
            max_tasks,
            max_stations,
        }
    }

    /// Cap the number of tasks.
    pub fn with_max_tasks(mut self, max_tasks: usize) -> Self {
        self.max_tasks = Some(max_tasks);
        self
    }

    /// Cap the number of distinct stations.
    pub fn with_max_stations(mut self, max_stations: usize) -> Self {
        self.max_stations = Some(max_stations);
        self
    }
}
