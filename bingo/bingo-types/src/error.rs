//! Error types for transport planning and sequencing.
//!
//! This module defines the [`BingoError`] enum. Every variant is a
//! precondition or data-consistency fault: the planner never retries, and
//! failures of the physical motion layer are not represented here.

use crate::color::Color;
use crate::coord::GridCoord;

/// Which per-color table a count fault was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Blocks recorded on circles.
    Blocks,
    /// Numbered block circles.
    Circles,
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blocks => f.write_str("blocks"),
            Self::Circles => f.write_str("circles"),
        }
    }
}

/// Errors that can occur while planning or sequencing a bingo run.
///
/// # Example
///
/// ```
/// use bingo_types::{BingoError, Color, TableKind};
///
/// let error = BingoError::ColorCount {
///     color: Color::Red,
///     kind: TableKind::Blocks,
///     count: 3,
/// };
/// assert!(error.to_string().contains("red"));
/// assert!(error.is_data_fault());
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BingoError {
    /// A paired color has a block or circle count other than 0 or 2.
    #[error("color {color} has {count} {kind}, expected 0 or 2")]
    ColorCount {
        /// The offending color.
        color: Color,
        /// Which table the count came from.
        kind: TableKind,
        /// The observed count.
        count: usize,
    },

    /// No black block was found on any circle.
    #[error("no black block on the area")]
    MissingBlackBlock,

    /// The drawn card number does not name a numbered circle.
    #[error("card number {0} is outside 1..=8")]
    InvalidCardNumber(u8),

    /// A numbered circle slot outside 1..=8 was requested.
    #[error("circle slot {0} is outside 1..=8")]
    InvalidSlot(u8),

    /// A coordinate lies outside the bingo area.
    #[error("coordinate {0} is outside the area")]
    OutOfArea(GridCoord),

    /// A block move was requested from an empty cell.
    #[error("no block at {0} to move")]
    NoBlockAt(GridCoord),

    /// A delivery path is too short to leave the robot one cell before the destination.
    #[error("path from {from} to {to} has {len} cells, need at least 2")]
    PathTooShort {
        /// Path start.
        from: GridCoord,
        /// Path end.
        to: GridCoord,
        /// Number of coordinates in the returned path.
        len: usize,
    },

    /// An invalid configuration parameter was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl BingoError {
    /// Creates an invalid configuration error with the given message.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Returns `true` if the error describes inconsistent board data.
    #[must_use]
    pub const fn is_data_fault(&self) -> bool {
        matches!(
            self,
            Self::ColorCount { .. } | Self::MissingBlackBlock | Self::NoBlockAt(_)
        )
    }

    /// Returns `true` if the error came from a collaborator returning an unusable path.
    #[must_use]
    pub const fn is_path_fault(&self) -> bool {
        matches!(self, Self::PathTooShort { .. })
    }
}
