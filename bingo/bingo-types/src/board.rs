//! The grid/state contract the planner and sequencer work against.
//!
//! [`BingoBoard`] is implemented by whatever owns the block layout and the
//! robot's logical pose. [`BingoArea`](crate::area::BingoArea) is the
//! in-memory implementation shipped with this crate.

use crate::color::{Block, Color, NodeType};
use crate::coord::GridCoord;
use crate::direction::Direction;
use crate::error::BingoError;

/// Number of numbered block circles.
pub const SLOT_COUNT: u8 = 8;

/// Returns the cell of numbered block circle `slot` (1..=8).
///
/// Numbered circles sit on odd/odd cells, numbered row-major, skipping the
/// centre cell.
///
/// # Example
///
/// ```
/// use bingo_types::{GridCoord, slot_coordinate};
///
/// assert_eq!(slot_coordinate(1), Some(GridCoord::new(1, 1)));
/// assert_eq!(slot_coordinate(5), Some(GridCoord::new(5, 3)));
/// assert_eq!(slot_coordinate(9), None);
/// ```
#[must_use]
pub const fn slot_coordinate(slot: u8) -> Option<GridCoord> {
    match slot {
        1 => Some(GridCoord::new(1, 1)),
        2 => Some(GridCoord::new(3, 1)),
        3 => Some(GridCoord::new(5, 1)),
        4 => Some(GridCoord::new(1, 3)),
        5 => Some(GridCoord::new(5, 3)),
        6 => Some(GridCoord::new(1, 5)),
        7 => Some(GridCoord::new(3, 5)),
        8 => Some(GridCoord::new(5, 5)),
        _ => None,
    }
}

/// Shared grid and robot-pose state.
///
/// During a run the sequencer holds the only `&mut` borrow, so every
/// mutation happens in program order.
pub trait BingoBoard {
    /// Classifies a cell.
    fn classify(&self, coord: GridCoord) -> NodeType;

    /// The block at a cell; `Color::None` if empty.
    fn block_at(&self, coord: GridCoord) -> Block;

    /// Circle color of numbered slot 1..=8.
    ///
    /// # Errors
    ///
    /// Returns [`BingoError::InvalidSlot`] outside 1..=8.
    fn circle_color_of_slot(&self, slot: u8) -> Result<Color, BingoError>;

    /// Cell of numbered slot 1..=8.
    ///
    /// # Errors
    ///
    /// Returns [`BingoError::InvalidSlot`] outside 1..=8.
    fn coordinate_of_slot(&self, slot: u8) -> Result<GridCoord, BingoError>;

    /// The drawn card number naming the black block's destination slot.
    fn card_number(&self) -> u8;

    /// Current logical position.
    fn position(&self) -> GridCoord;

    /// Overwrites the logical position.
    fn set_position(&mut self, coord: GridCoord);

    /// Current logical heading.
    fn heading(&self) -> Direction;

    /// Overwrites the logical heading.
    fn set_heading(&mut self, heading: Direction);

    /// Moves the block at `from` onto `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if either cell is outside the area or `from` is empty.
    fn move_block(&mut self, from: GridCoord, to: GridCoord) -> Result<(), BingoError>;

    /// Signed minimal 45° turn count between two headings.
    fn rotation_count(&self, from: Direction, to: Direction) -> i32 {
        from.rotation_count(to)
    }

    /// Restores the start-of-run layout and pose.
    fn reset_to_initial_state(&mut self);
}
