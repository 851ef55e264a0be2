//! Block-to-circle pairing and task list construction.
//!
//! Each paired color has two blocks and two circles, so there are only two
//! possible assignments:
//!
//! - **Direct**: block 0 → circle 0, block 1 → circle 1
//! - **Crossed**: block 0 → circle 1, block 1 → circle 0
//!
//! The crossed assignment wins only when its total Manhattan distance is
//! strictly smaller; ties keep the direct assignment.
//!
//! # Example
//!
//! ```
//! use bingo_plan::pairing::{Assignment, choose_assignment};
//! use bingo_types::GridCoord;
//!
//! let blocks = (GridCoord::new(1, 1), GridCoord::new(5, 5));
//! let circles = (GridCoord::new(5, 5), GridCoord::new(1, 1));
//!
//! let choice = choose_assignment(blocks, circles);
//! assert_eq!(choice.assignment, Assignment::Crossed);
//! assert_eq!(choice.total_distance, 0);
//! ```

use bingo_types::{
    BingoBoard, BingoError, Color, GridCoord, SLOT_COUNT, TableKind, TaskList, TransportTask,
};
use tracing::{debug, info, warn};

use crate::classify::{ColorSlots, ColorTables, classify_colors};

/// Which of the two block-to-circle assignments was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    /// Block 0 → circle 0, block 1 → circle 1.
    Direct,
    /// Block 0 → circle 1, block 1 → circle 0.
    Crossed,
}

/// The outcome of pairing one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairingChoice {
    /// Chosen assignment.
    pub assignment: Assignment,
    /// Both block → circle tasks, in block order.
    pub tasks: [TransportTask; 2],
    /// Total distance of the chosen assignment.
    pub total_distance: u32,
    /// Total distance of the rejected assignment.
    pub alternative_distance: u32,
}

/// Picks the cheaper assignment of two blocks to two circles.
#[must_use]
pub fn choose_assignment(
    blocks: (GridCoord, GridCoord),
    circles: (GridCoord, GridCoord),
) -> PairingChoice {
    let (b0, b1) = blocks;
    let (c0, c1) = circles;

    let direct = b0.manhattan_distance(c0) + b1.manhattan_distance(c1);
    let crossed = b0.manhattan_distance(c1) + b1.manhattan_distance(c0);

    if crossed < direct {
        PairingChoice {
            assignment: Assignment::Crossed,
            tasks: [TransportTask::new(b0, c1), TransportTask::new(b1, c0)],
            total_distance: crossed,
            alternative_distance: direct,
        }
    } else {
        PairingChoice {
            assignment: Assignment::Direct,
            tasks: [TransportTask::new(b0, c0), TransportTask::new(b1, c1)],
            total_distance: direct,
            alternative_distance: crossed,
        }
    }
}

/// Builds the ordered task list from classified color tables.
///
/// Task 0 moves the first black block to the circle named by `card_number`,
/// whether or not it is already there. Paired colors follow in increasing
/// color order, skipping blocks that already sit on their circle.
///
/// # Errors
///
/// - [`BingoError::InvalidCardNumber`] if `card_number` is outside 1..=8
/// - [`BingoError::MissingBlackBlock`] if no black block was recorded
/// - [`BingoError::ColorCount`] if a paired color has a block or circle count
///   other than 0 or 2
/// - any error returned by `slot_coordinate`
pub fn plan_transport<F>(
    tables: &ColorTables,
    card_number: u8,
    slot_coordinate: F,
) -> Result<TaskList, BingoError>
where
    F: Fn(u8) -> Result<GridCoord, BingoError>,
{
    if card_number == 0 || card_number > SLOT_COUNT {
        return Err(BingoError::InvalidCardNumber(card_number));
    }

    for color in Color::PAIRED {
        check_count(color, TableKind::Blocks, tables.blocks.slots(color))?;
        check_count(color, TableKind::Circles, tables.circles.slots(color))?;
    }

    let black_source = tables
        .blocks
        .slots(Color::Black)
        .and_then(ColorSlots::first)
        .ok_or(BingoError::MissingBlackBlock)?;
    let black_destination = slot_coordinate(card_number)?;
    let mut tasks = TaskList::new(TransportTask::new(black_source, black_destination));

    for color in Color::PAIRED {
        let blocks = tables.blocks.slots(color).and_then(ColorSlots::pair);
        let circles = tables.circles.slots(color).and_then(ColorSlots::pair);

        match (blocks, circles) {
            (Some(blocks), Some(circles)) => {
                let choice = choose_assignment(blocks, circles);
                debug!(
                    %color,
                    assignment = ?choice.assignment,
                    total = choice.total_distance,
                    alternative = choice.alternative_distance,
                    "Paired color"
                );
                for task in choice.tasks {
                    if !task.is_in_place() {
                        tasks.push(task);
                    }
                }
            }
            (None, None) => {}
            _ => {
                warn!(%color, "Color has blocks without circles or circles without blocks, skipping");
            }
        }
    }

    info!(
        tasks = tasks.len(),
        black = %tasks.black(),
        "Transport plan computed"
    );

    Ok(tasks)
}

/// Classifies the board and builds its task list.
///
/// # Errors
///
/// See [`plan_transport`].
pub fn plan_from_board<B: BingoBoard + ?Sized>(board: &B) -> Result<TaskList, BingoError> {
    let tables = classify_colors(board);
    plan_transport(&tables, board.card_number(), |slot| {
        board.coordinate_of_slot(slot)
    })
}

fn check_count(
    color: Color,
    kind: TableKind,
    slots: Option<&ColorSlots>,
) -> Result<(), BingoError> {
    let count = slots.map_or(0, ColorSlots::count);
    if count == 0 || count == ColorSlots::CAPACITY {
        Ok(())
    } else {
        Err(BingoError::ColorCount { color, kind, count })
    }
}
