//! Run sequencing for block bingo.
//!
//! The [`Sequencer`] drives one run over a [`BingoBoard`](bingo_types::BingoBoard):
//! it plans the transport tasks, enters the area toward the nearest colored
//! task, alternates fetch and deliver until no colored task is left, then
//! parks and turns to the course's final heading.
//!
//! Path finding, motion synthesis and robot control are delegated through
//! the traits in [`collaborator`]. The sequencer keeps the logical pose on
//! the board in step with what it asked the navigator to do.
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for [`Phase`],
//!   [`Entry`] and [`RunReport`]

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod collaborator;
pub mod report;
pub mod sequencer;

#[cfg(test)]
mod test_support;

pub use collaborator::{MotionSynthesizer, Navigator, PathFinder};
pub use report::{Entry, RunReport};
pub use sequencer::{Phase, Sequencer, entry_cell};
