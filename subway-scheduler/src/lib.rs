//! Subway task scheduler.
//!
//! Given scored, time-windowed tasks at stations of a subway network, picks
//! the non-overlapping subset with the highest total score and, among equal
//! scores, the cheapest round trip from a start station through every chosen
//! task and back.
//!
//! The work happens in two steps: [`network`] resolves the minimum fee
//! between every pair of stations, then [`planner`] runs a weighted interval
//! scheduling dynamic program priced with those fees. [`wire`] holds the JSON
//! shapes and [`solve`] ties everything together.

pub mod domain;
pub mod network;
pub mod planner;
pub mod solve;
pub mod wire;
