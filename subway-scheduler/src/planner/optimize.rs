//! Weighted interval scheduling over the station network.
//!
//! Tasks are sorted by end time so that every compatible predecessor of a
//! task appears before it. For each task we keep the best `(score, fee)` of
//! any chain of compatible tasks ending there, where fee is the travel cost
//! from the start station through each task's station in turn. The answer
//! is the best chain once the trip back to the start is added, or the empty
//! schedule if nothing beats it.
//!
//! "Best" means higher score, then lower fee. Only strict improvements
//! replace an incumbent, so among exact ties the candidate seen first in
//! sorted order wins. Together with the stable sort this makes the result
//! fully determined by the input order.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::domain::{Fee, StationId, StationIdx, Task};
use crate::network::StationNetwork;

use super::schedule::Schedule;

/// Error from the optimizer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// A task or the start refers to a station the network never indexed.
    #[error("station {0} is not part of the resolved network")]
    UnknownStation(StationId),

    /// A chain of tasks scores more than a `u64` can hold.
    #[error("task scores add up to more than 64 bits")]
    ScoreOverflow,
}

/// A task together with its dense station position.
#[derive(Debug, Clone, Copy)]
struct Indexed<'a> {
    task: &'a Task,
    station: StationIdx,
}

/// Best chain ending at one task.
#[derive(Debug, Clone, Copy)]
struct ChainState {
    score: u64,
    /// Travel cost from the start up to this task, without the way back.
    fee: Fee,
    /// Position (in sorted order) of the previous task in the chain.
    prev: Option<usize>,
}

/// Higher score wins; on equal score, strictly lower fee wins.
fn beats(score: u64, fee: Fee, than_score: u64, than_fee: Fee) -> bool {
    score > than_score || (score == than_score && fee < than_fee)
}

/// Pick the highest-scoring, then cheapest, set of non-overlapping tasks.
///
/// `network` must have been built from a station set containing `start` and
/// every task's station; otherwise [`PlanError::UnknownStation`] is returned.
/// A feasible chain whose scores overflow `u64` gives
/// [`PlanError::ScoreOverflow`].
/// Transitions over unreachable station pairs are never taken, so a task
/// that cannot be reached from the start (or cannot get back) is simply
/// never chosen.
pub fn optimize(
    tasks: &[Task],
    network: &StationNetwork,
    start: StationId,
) -> Result<Schedule, PlanError> {
    if tasks.is_empty() {
        debug!("No tasks, returning empty schedule");
        return Ok(Schedule::empty());
    }

    let origin = network
        .index_of(start)
        .ok_or(PlanError::UnknownStation(start))?;
    let distances = network.distances();

    let mut order = tasks
        .iter()
        .map(|task| {
            network
                .index_of(task.station)
                .map(|station| Indexed { task, station })
                .ok_or(PlanError::UnknownStation(task.station))
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Stable: equal (end, start) keep input order.
    order.sort_by(|a, b| {
        a.task
            .window
            .end()
            .cmp(&b.task.window.end())
            .then_with(|| a.task.window.start().cmp(&b.task.window.start()))
    });

    let mut states: Vec<Option<ChainState>> = Vec::with_capacity(order.len());

    for (i, current) in order.iter().enumerate() {
        let mut best = distances
            .get(origin, current.station)
            .fee()
            .map(|fee| ChainState {
                score: current.task.score,
                fee,
                prev: None,
            });

        for (j, earlier) in order[..i].iter().enumerate() {
            if !earlier.task.precedes(current.task) {
                continue;
            }
            let Some(prior) = states[j] else {
                continue;
            };
            let Some(fee) = distances
                .get(earlier.station, current.station)
                .fee()
                .and_then(|leg| prior.fee.checked_add(leg))
            else {
                continue;
            };

            let score = prior
                .score
                .checked_add(current.task.score)
                .ok_or(PlanError::ScoreOverflow)?;
            if best.is_none_or(|b| beats(score, fee, b.score, b.fee)) {
                best = Some(ChainState {
                    score,
                    fee,
                    prev: Some(j),
                });
            }
        }

        match &best {
            Some(state) => trace!(
                task = %current.task.name,
                score = state.score,
                fee = %state.fee,
                prev = ?state.prev,
                "Best chain ending at task"
            ),
            None => trace!(task = %current.task.name, "Task unreachable from start"),
        }

        states.push(best);
    }

    let mut winner: Option<usize> = None;
    let (mut max_score, mut min_fee) = (0u64, Fee::ZERO);

    for (i, (state, task)) in states.iter().zip(&order).enumerate() {
        let Some(state) = state else {
            continue;
        };
        let Some(total) = distances
            .get(task.station, origin)
            .fee()
            .and_then(|back| state.fee.checked_add(back))
        else {
            continue;
        };
        if beats(state.score, total, max_score, min_fee) {
            max_score = state.score;
            min_fee = total;
            winner = Some(i);
        }
    }

    let Some(last) = winner else {
        debug!(tasks = tasks.len(), "No chain beats the empty schedule");
        return Ok(Schedule::empty());
    };

    let mut chosen = Vec::new();
    let mut cursor = Some(last);
    while let Some(i) = cursor {
        chosen.push(order[i].task.clone());
        cursor = states[i].and_then(|s| s.prev);
    }
    chosen.reverse();
    chosen.sort_by(presentation_order);

    debug!(
        tasks = tasks.len(),
        chosen = chosen.len(),
        max_score,
        min_fee = %min_fee,
        "Schedule optimized"
    );

    Ok(Schedule {
        max_score,
        min_fee,
        tasks: chosen,
    })
}

/// Start ascending, then end, then name.
fn presentation_order(a: &Task, b: &Task) -> Ordering {
    a.window
        .start()
        .cmp(&b.window.start())
        .then_with(|| a.window.end().cmp(&b.window.end()))
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Connection, Distance, Problem, TimeWindow};
    use proptest::prelude::*;

    /// Small problems: few stations, integer fees (so float sums are exact),
    /// and tasks of positive length (so a compatible set has one order).
    fn problem_strategy() -> impl Strategy<Value = Problem> {
        let task = (0i64..20, 1i64..6, 0i64..5, 0u64..10);
        let edge = (0i64..5, 0i64..5, 0u32..20);
        (
            0i64..5,
            prop::collection::vec(task, 0..7),
            prop::collection::vec(edge, 0..8),
        )
            .prop_map(|(start, tasks, edges)| {
                let tasks = tasks
                    .into_iter()
                    .enumerate()
                    .map(|(i, (s, len, station, score))| {
                        Task::new(
                            format!("T{i}"),
                            TimeWindow::new(s, s + len).unwrap(),
                            StationId::new(station),
                            score,
                        )
                    })
                    .collect();
                let connections = edges
                    .into_iter()
                    .map(|(a, b, w)| {
                        Connection::new(
                            StationId::new(a),
                            StationId::new(b),
                            Fee::new(f64::from(w)).unwrap(),
                        )
                    })
                    .collect();
                Problem::new(StationId::new(start), tasks, connections)
            })
    }

    fn run(problem: &Problem) -> Schedule {
        let network = StationNetwork::for_problem(problem);
        optimize(&problem.tasks, &network, problem.start).unwrap()
    }

    /// Fee of visiting `tasks` in the given order and returning.
    fn round_trip(network: &StationNetwork, start: StationId, tasks: &[&Task]) -> Distance {
        let mut total = Distance::ZERO;
        let mut at = start;
        for t in tasks {
            total = total.then(network.distance(at, t.station));
            at = t.station;
        }
        total.then(network.distance(at, start))
    }

    /// Exhaustive search over every subset.
    fn brute_force(problem: &Problem) -> (u64, Fee) {
        let network = StationNetwork::for_problem(problem);
        let m = problem.tasks.len();
        let (mut best_score, mut best_fee) = (0u64, Fee::ZERO);

        for mask in 1u32..(1 << m) {
            let mut subset: Vec<&Task> = (0..m)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| &problem.tasks[i])
                .collect();
            subset.sort_by_key(|t| t.window.start());
            if subset.windows(2).any(|w| !w[0].precedes(w[1])) {
                continue;
            }
            let Some(fee) = round_trip(&network, problem.start, &subset).fee() else {
                continue;
            };
            let score: u64 = subset.iter().map(|t| t.score).sum();
            if beats(score, fee, best_score, best_fee) {
                best_score = score;
                best_fee = fee;
            }
        }

        (best_score, best_fee)
    }

    proptest! {
        /// Matches exhaustive search on score and fee
        #[test]
        fn optimal(problem in problem_strategy()) {
            let schedule = run(&problem);
            let (score, fee) = brute_force(&problem);
            prop_assert_eq!(schedule.max_score, score);
            prop_assert_eq!(schedule.min_fee, fee);
        }

        /// Reported score and fee describe the reported tasks
        #[test]
        fn self_consistent(problem in problem_strategy()) {
            let network = StationNetwork::for_problem(&problem);
            let schedule = optimize(&problem.tasks, &network, problem.start).unwrap();

            let chosen: Vec<&Task> = schedule.tasks.iter().collect();
            for pair in chosen.windows(2) {
                prop_assert!(pair[0].precedes(pair[1]), "{:?} overlaps {:?}", pair[0], pair[1]);
            }

            let score: u64 = chosen.iter().map(|t| t.score).sum();
            prop_assert_eq!(schedule.max_score, score);
            prop_assert_eq!(
                round_trip(&network, problem.start, &chosen),
                Distance::Reachable(schedule.min_fee)
            );
            if schedule.max_score == 0 {
                prop_assert!(schedule.tasks.is_empty());
                prop_assert_eq!(schedule.min_fee, Fee::ZERO);
            }
        }

        /// Same input, same output
        #[test]
        fn deterministic(problem in problem_strategy()) {
            prop_assert_eq!(run(&problem), run(&problem));
        }

        /// Chosen tasks are always reachable from the start
        #[test]
        fn only_reachable_tasks(problem in problem_strategy()) {
            let network = StationNetwork::for_problem(&problem);
            let schedule = optimize(&problem.tasks, &network, problem.start).unwrap();
            for task in &schedule.tasks {
                prop_assert!(network.distance(problem.start, task.station).is_reachable());
            }
        }

        /// Cheapening a connection keeps the score and never raises the fee
        #[test]
        fn cheaper_connection_is_monotone(
            problem in problem_strategy(),
            pick in any::<prop::sample::Index>(),
            discount in 0u32..20,
        ) {
            prop_assume!(!problem.connections.is_empty());
            let before = run(&problem);

            let mut cheaper = problem.clone();
            let k = pick.index(cheaper.connections.len());
            let old = cheaper.connections[k].fee.value();
            let discounted = (old - f64::from(discount)).max(0.0);
            cheaper.connections[k].fee = Fee::new(discounted).unwrap();
            let after = run(&cheaper);

            prop_assert_eq!(after.max_score, before.max_score);
            prop_assert!(after.min_fee <= before.min_fee);
        }
    }
}
