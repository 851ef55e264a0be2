//! Nearest-next task selection.
//!
//! Picks the colored task whose source is closest to the robot, while
//! deferring tasks whose destination is still occupied by another colored
//! block. Index 0 (the black task) is never a candidate.
//!
//! Index 1 is the fallback and is taken regardless of what occupies its
//! destination. A later task replaces the current candidate only if it is
//! strictly closer and its destination is empty or holds the black block.
//!
//! # Example
//!
//! ```
//! use bingo_plan::select::select_nearest;
//! use bingo_types::{Color, GridCoord, TransportTask};
//!
//! let tasks = [
//!     TransportTask::new(GridCoord::new(3, 3), GridCoord::new(1, 1)),
//!     TransportTask::new(GridCoord::new(5, 6), GridCoord::new(5, 5)),
//!     TransportTask::new(GridCoord::new(1, 6), GridCoord::new(1, 5)),
//! ];
//!
//! let index = select_nearest(GridCoord::new(2, 6), &tasks, |_| Color::None);
//! assert_eq!(index, Some(2));
//! ```

use bingo_types::{BingoBoard, Color, GridCoord, TaskList, TransportTask};
use tracing::debug;

/// Returns the index of the next task to execute.
///
/// `occupant` reports the color of the block currently on a cell.
///
/// Returns `None` when `tasks` holds no colored task (length ≤ 1); otherwise
/// the result is always in `1..tasks.len()`.
pub fn select_nearest<F>(
    position: GridCoord,
    tasks: &[TransportTask],
    occupant: F,
) -> Option<usize>
where
    F: Fn(GridCoord) -> Color,
{
    let fallback = tasks.get(1)?;
    let mut best = 1;
    let mut best_distance = position.manhattan_distance(fallback.source);

    for (index, task) in tasks.iter().enumerate().skip(2) {
        let distance = position.manhattan_distance(task.source);
        if distance < best_distance && occupant(task.destination).is_free_for_delivery() {
            best = index;
            best_distance = distance;
        }
    }

    Some(best)
}

/// Selects from a [`TaskList`] using the board's position and occupancy.
pub fn select_next<B: BingoBoard + ?Sized>(board: &B, tasks: &TaskList) -> Option<usize> {
    let position = board.position();
    let index = select_nearest(position, tasks.as_slice(), |coord| {
        board.block_at(coord).color
    })?;
    debug!(%position, index, "Selected next task");
    Some(index)
}
