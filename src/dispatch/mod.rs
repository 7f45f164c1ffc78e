//! Bounded concurrent request dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! dispatch(url, total, concurrent)
//!     → token counter (total opaque work tokens)
//!     → min(concurrent, total) worker tasks, each:
//!         take token → GET url → Outcome → outcome channel
//!     → fan-in loop drains the channel until every worker is done
//!     → Tally (success / error counts)
//! ```
//!
//! # Design Decisions
//! - The outcome channel only closes once the last worker drops its sender,
//!   so the fan-in loop cannot terminate before all outcomes arrived
//! - A failed request counts once and is never retried
//! - No per-request timeout and no batch cancellation

pub mod outcome;
pub mod pool;

pub use outcome::{Outcome, Tally};
pub use pool::Dispatcher;
