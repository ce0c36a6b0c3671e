//! Domain types for the subway task scheduler.
//!
//! All types enforce their invariants at construction time: fees are finite
//! and non-negative, windows never end before they start. Code that receives
//! these types can trust their validity.

mod fee;
mod problem;
mod station;
mod task;

pub use fee::{Distance, Fee, InvalidFee};
pub use problem::{Connection, Problem};
pub use station::{StationId, StationIdx};
pub use task::{InvalidWindow, Task, TimeWindow};
