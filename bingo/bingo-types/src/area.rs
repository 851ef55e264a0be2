//! In-memory bingo area.
//!
//! [`BingoArea`] stores the block layout on a fixed 7×7 grid together with
//! the numbered circle colors, the drawn card and the robot's logical pose.
//!
//! # Layout
//!
//! - Cross circles sit on even/even cells, `(0,0)` through `(6,6)`.
//! - Block circles sit on odd/odd cells. Eight of them are numbered 1..=8
//!   (see [`slot_coordinate`]); the centre `(3,3)` is unnumbered.
//!
//! # Example
//!
//! ```
//! use bingo_types::{BingoArea, BingoBoard, Color, GridCoord, NodeType};
//!
//! let mut area = BingoArea::new([Color::Red; 8], 3);
//! area.place_block(GridCoord::new(0, 0), Color::Blue).unwrap();
//!
//! assert_eq!(area.classify(GridCoord::new(0, 0)), NodeType::CrossCircle);
//! assert_eq!(area.classify(GridCoord::new(2, 0)), NodeType::Circle);
//! assert_eq!(area.classify(GridCoord::new(1, 0)), NodeType::Plain);
//!
//! area.move_block(GridCoord::new(0, 0), GridCoord::new(1, 1)).unwrap();
//! assert_eq!(area.classify(GridCoord::new(1, 1)), NodeType::BlockCircle);
//!
//! area.reset_to_initial_state();
//! assert_eq!(area.block_at(GridCoord::new(0, 0)).color, Color::Blue);
//! ```

use tracing::warn;

use crate::board::{BingoBoard, SLOT_COUNT, slot_coordinate};
use crate::color::{Block, Color, NodeType};
use crate::coord::{AREA_SIZE, GridCoord};
use crate::direction::Direction;
use crate::error::BingoError;

#[allow(clippy::cast_sign_loss)]
const SIDE: usize = AREA_SIZE as usize;

type Layout = [[Color; SIDE]; SIDE];

/// Start-of-run state restored by [`BingoBoard::reset_to_initial_state`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    layout: Layout,
    position: GridCoord,
    heading: Direction,
}

/// A bingo area held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BingoArea {
    /// Current block colors, indexed `[y][x]`.
    layout: Layout,
    /// Circle color of numbered slots 1..=8 at index `slot - 1`.
    slot_colors: [Color; SLOT_COUNT as usize],
    /// Drawn card number.
    card_number: u8,
    /// Logical robot position.
    position: GridCoord,
    /// Logical robot heading.
    heading: Direction,
    /// State to restore on reset.
    initial: Snapshot,
}

impl BingoArea {
    /// Creates an empty area with the given circle colors and card number.
    ///
    /// The robot starts at the left straight-entry cell facing north; use
    /// [`BingoArea::set_start`] to change it.
    #[must_use]
    pub fn new(slot_colors: [Color; SLOT_COUNT as usize], card_number: u8) -> Self {
        let layout = [[Color::None; SIDE]; SIDE];
        let position = GridCoord::new(2, AREA_SIZE - 1);
        let heading = Direction::North;
        Self {
            layout,
            slot_colors,
            card_number,
            position,
            heading,
            initial: Snapshot {
                layout,
                position,
                heading,
            },
        }
    }

    /// Puts a block on a cell as part of the initial layout.
    ///
    /// # Errors
    ///
    /// Returns [`BingoError::OutOfArea`] if the cell is outside the area.
    pub fn place_block(&mut self, coord: GridCoord, color: Color) -> Result<(), BingoError> {
        let (x, y) = cell_index(coord).ok_or(BingoError::OutOfArea(coord))?;
        self.layout[y][x] = color;
        self.initial.layout[y][x] = color;
        Ok(())
    }

    /// Sets the pre-entry pose as part of the initial state.
    pub fn set_start(&mut self, position: GridCoord, heading: Direction) {
        self.position = position;
        self.heading = heading;
        self.initial.position = position;
        self.initial.heading = heading;
    }

    fn color_at(&self, coord: GridCoord) -> Color {
        cell_index(coord).map_or(Color::None, |(x, y)| self.layout[y][x])
    }
}

impl BingoBoard for BingoArea {
    fn classify(&self, coord: GridCoord) -> NodeType {
        let occupied = !matches!(self.color_at(coord), Color::None);
        if is_cross_circle(coord) {
            if occupied {
                NodeType::CrossCircle
            } else {
                NodeType::Circle
            }
        } else if is_block_circle(coord) {
            if occupied {
                NodeType::BlockCircle
            } else {
                NodeType::Circle
            }
        } else {
            NodeType::Plain
        }
    }

    fn block_at(&self, coord: GridCoord) -> Block {
        Block::new(coord, self.color_at(coord))
    }

    fn circle_color_of_slot(&self, slot: u8) -> Result<Color, BingoError> {
        if slot == 0 || slot > SLOT_COUNT {
            return Err(BingoError::InvalidSlot(slot));
        }
        Ok(self.slot_colors[usize::from(slot - 1)])
    }

    fn coordinate_of_slot(&self, slot: u8) -> Result<GridCoord, BingoError> {
        slot_coordinate(slot).ok_or(BingoError::InvalidSlot(slot))
    }

    fn card_number(&self) -> u8 {
        self.card_number
    }

    fn position(&self) -> GridCoord {
        self.position
    }

    fn set_position(&mut self, coord: GridCoord) {
        self.position = coord;
    }

    fn heading(&self) -> Direction {
        self.heading
    }

    fn set_heading(&mut self, heading: Direction) {
        self.heading = heading;
    }

    fn move_block(&mut self, from: GridCoord, to: GridCoord) -> Result<(), BingoError> {
        let (fx, fy) = cell_index(from).ok_or(BingoError::OutOfArea(from))?;
        let (tx, ty) = cell_index(to).ok_or(BingoError::OutOfArea(to))?;

        let block = self.block_at(from);
        if block.is_empty() {
            return Err(BingoError::NoBlockAt(from));
        }
        let color = block.color;
        let displaced = self.layout[ty][tx];
        if !matches!(displaced, Color::None) && from != to {
            warn!(%from, %to, %displaced, "Delivering onto an occupied cell");
        }

        self.layout[fy][fx] = Color::None;
        self.layout[ty][tx] = color;
        Ok(())
    }

    fn reset_to_initial_state(&mut self) {
        self.layout = self.initial.layout;
        self.position = self.initial.position;
        self.heading = self.initial.heading;
    }
}

#[allow(clippy::cast_sign_loss)]
fn cell_index(coord: GridCoord) -> Option<(usize, usize)> {
    coord
        .in_area()
        .then_some((coord.x as usize, coord.y as usize))
}

const fn is_cross_circle(coord: GridCoord) -> bool {
    coord.in_area() && coord.x % 2 == 0 && coord.y % 2 == 0
}

const fn is_block_circle(coord: GridCoord) -> bool {
    coord.in_area() && coord.x % 2 == 1 && coord.y % 2 == 1
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn area() -> BingoArea {
        BingoArea::new(
            [
                Color::Red,
                Color::Yellow,
                Color::Blue,
                Color::Green,
                Color::Red,
                Color::Yellow,
                Color::Blue,
                Color::Green,
            ],
            5,
        )
    }

    #[test]
    fn test_slot_lookups() {
        let area = area();
        assert_eq!(area.circle_color_of_slot(1).unwrap(), Color::Red);
        assert_eq!(area.circle_color_of_slot(8).unwrap(), Color::Green);
        assert_eq!(area.coordinate_of_slot(7).unwrap(), GridCoord::new(3, 5));
        assert!(matches!(
            area.circle_color_of_slot(0),
            Err(BingoError::InvalidSlot(0))
        ));
        assert!(matches!(
            area.coordinate_of_slot(9),
            Err(BingoError::InvalidSlot(9))
        ));
    }

    #[test]
    fn test_numbered_slots_are_block_circles() {
        for slot in 1..=SLOT_COUNT {
            let coord = slot_coordinate(slot).unwrap();
            assert!(is_block_circle(coord));
            assert_ne!(coord, GridCoord::new(3, 3));
        }
    }

    #[test]
    fn test_classify() {
        let mut area = area();
        area.place_block(GridCoord::new(3, 3), Color::Black).unwrap();
        area.place_block(GridCoord::new(4, 2), Color::Red).unwrap();

        assert_eq!(area.classify(GridCoord::new(3, 3)), NodeType::BlockCircle);
        assert_eq!(area.classify(GridCoord::new(4, 2)), NodeType::CrossCircle);
        assert_eq!(area.classify(GridCoord::new(1, 1)), NodeType::Circle);
        assert_eq!(area.classify(GridCoord::new(0, 1)), NodeType::Plain);
        assert_eq!(area.classify(GridCoord::new(-1, 0)), NodeType::Plain);
    }

    #[test]
    fn test_place_block_out_of_area() {
        let mut area = area();
        let result = area.place_block(GridCoord::new(7, 7), Color::Red);
        assert!(matches!(result, Err(BingoError::OutOfArea(_))));
    }

    #[test]
    fn test_move_block() {
        let mut area = area();
        area.place_block(GridCoord::new(0, 0), Color::Red).unwrap();
        area.move_block(GridCoord::new(0, 0), GridCoord::new(1, 1))
            .unwrap();

        assert!(area.block_at(GridCoord::new(0, 0)).is_empty());
        assert_eq!(area.block_at(GridCoord::new(1, 1)).color, Color::Red);
    }

    #[test]
    fn test_move_block_from_empty_cell() {
        let mut area = area();
        let result = area.move_block(GridCoord::new(0, 0), GridCoord::new(1, 1));
        assert!(matches!(result, Err(BingoError::NoBlockAt(_))));
    }

    #[test]
    fn test_reset_restores_layout_and_pose() {
        let mut area = area();
        area.place_block(GridCoord::new(2, 2), Color::Blue).unwrap();
        area.set_start(GridCoord::new(4, 6), Direction::North);

        area.move_block(GridCoord::new(2, 2), GridCoord::new(5, 1))
            .unwrap();
        area.set_position(GridCoord::new(5, 2));
        area.set_heading(Direction::SouthWest);

        area.reset_to_initial_state();
        assert_eq!(area.block_at(GridCoord::new(2, 2)).color, Color::Blue);
        assert!(area.block_at(GridCoord::new(5, 1)).is_empty());
        assert_eq!(area.position(), GridCoord::new(4, 6));
        assert_eq!(area.heading(), Direction::North);
    }

    #[test]
    fn test_rotation_count_delegates_to_direction() {
        let area = area();
        assert_eq!(area.rotation_count(Direction::NorthWest, Direction::South), -3);
    }
}
