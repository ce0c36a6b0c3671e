//! JSON request/response shapes and their conversion to domain types.

mod convert;
mod types;

pub use convert::{InputError, convert_request};
pub use types::{ConnectionDto, ScheduleRequest, ScheduleResponse, TaskDto};
