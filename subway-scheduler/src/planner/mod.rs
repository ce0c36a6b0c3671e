//! Schedule optimizer.
//!
//! Chooses the subset of non-overlapping tasks with the highest total score,
//! breaking score ties by the cheapest round trip from the start station
//! through every chosen task and back.

mod config;
mod optimize;
mod schedule;


pub use config::PlannerConfig;
pub use optimize::{PlanError, optimize};
pub use schedule::Schedule;
