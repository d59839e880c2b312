//! Poll pipeline.
//!
//! - `check_response`: Validate the shape of an API body
//! - `parse_status`: Turn a homework record into a chat message
//! - `LoopState`: Dedup and watermark tracking between cycles
//! - `Poller`: The never-ending poll loop

mod poll;
mod state;
mod status;
mod validate;

pub use poll::{CycleOutcome, PollContext, Poller};
pub use state::LoopState;
pub use status::parse_status;
pub use validate::check_response;
