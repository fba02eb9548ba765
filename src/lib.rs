//! Assign opinion pollsters to weighting tiers by their historical accuracy.
//!
//! The core is [`allocator::allocate`]: rank the records by error metric and deal them into the
//! consecutive buckets of a [`schedule::TierSchedule`], each bucket splitting its weight budget
//! evenly between its members.

pub mod allocator;
pub mod approval;
pub mod commands;
pub mod error;
pub mod opt;
pub mod prelude;
pub mod ratings;
pub mod report;
pub mod schedule;
pub mod states;
mod delimited;

pub use allocator::{Allocation, OverflowPolicy, ScoreRecord, WeightedResult, allocate, allocate_with};
pub use error::{ConfigurationError, Error, InvalidInputError};
pub use schedule::{TierSchedule, TierSpec};
