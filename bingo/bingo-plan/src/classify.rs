//! Grouping of block and circle coordinates by color.
//!
//! # Example
//!
//! ```
//! use bingo_plan::classify::classify_colors;
//! use bingo_types::{BingoArea, Color, GridCoord};
//!
//! let mut area = BingoArea::new([Color::Red; 8], 1);
//! area.place_block(GridCoord::new(0, 0), Color::Blue).unwrap();
//! area.place_block(GridCoord::new(6, 0), Color::Blue).unwrap();
//!
//! let tables = classify_colors(&area);
//! let blue = tables.blocks.slots(Color::Blue).unwrap();
//! assert_eq!(blue.coords(), &[GridCoord::new(0, 0), GridCoord::new(6, 0)]);
//! assert_eq!(tables.circles.slots(Color::Red).unwrap().count(), 8);
//! ```

use bingo_types::{BingoBoard, COLOR_COUNT, Color, GridCoord, SLOT_COUNT};

/// Up to two coordinates of one color, plus how many were observed.
///
/// Only the first two sightings are stored. The count keeps growing past
/// that so an overfull color is still visible to the pairing check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorSlots {
    coords: [GridCoord; Self::CAPACITY],
    count: usize,
}

impl ColorSlots {
    /// Number of coordinates stored per color.
    pub const CAPACITY: usize = 2;

    /// Creates an empty container.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            coords: [GridCoord::origin(); Self::CAPACITY],
            count: 0,
        }
    }

    /// Records a sighting.
    pub fn record(&mut self, coord: GridCoord) {
        if let Some(slot) = self.coords.get_mut(self.count) {
            *slot = coord;
        }
        self.count += 1;
    }

    /// Number of sightings, including any that were not stored.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Stored coordinates in first-seen order.
    #[must_use]
    pub fn coords(&self) -> &[GridCoord] {
        &self.coords[..self.count.min(Self::CAPACITY)]
    }

    /// The first recorded coordinate.
    #[must_use]
    pub fn first(&self) -> Option<GridCoord> {
        self.coords().first().copied()
    }

    /// Both coordinates, when exactly two were recorded.
    #[must_use]
    pub const fn pair(&self) -> Option<(GridCoord, GridCoord)> {
        if self.count == Self::CAPACITY {
            Some((self.coords[0], self.coords[1]))
        } else {
            None
        }
    }
}

/// One [`ColorSlots`] per colored ordinal (black plus the four paired colors).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorTable {
    slots: [ColorSlots; COLOR_COUNT],
}

impl ColorTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [ColorSlots::new(); COLOR_COUNT],
        }
    }

    /// Records a coordinate under `color`; `Color::None` is ignored.
    pub fn record(&mut self, color: Color, coord: GridCoord) {
        if let Some(slots) = color.index().and_then(|i| self.slots.get_mut(i)) {
            slots.record(coord);
        }
    }

    /// The entries recorded for `color`, or `None` for `Color::None`.
    #[must_use]
    pub fn slots(&self, color: Color) -> Option<&ColorSlots> {
        color.index().and_then(|i| self.slots.get(i))
    }
}

/// Blocks-by-color and circles-by-color.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorTables {
    /// Coordinates of blocks sitting on circles, by block color.
    pub blocks: ColorTable,
    /// Coordinates of numbered circles, by circle color.
    pub circles: ColorTable,
}

/// Scans the board and groups blocks and numbered circles by color.
///
/// Cells are visited row-major (rows outer, columns inner) and only cells
/// carrying a block on a circle are recorded. Numbered slots are visited
/// 1 through 8. The board is not modified.
pub fn classify_colors<B: BingoBoard + ?Sized>(board: &B) -> ColorTables {
    let mut tables = ColorTables::default();

    for coord in GridCoord::area_cells() {
        if board.classify(coord).carries_block_on_circle() {
            tables.blocks.record(board.block_at(coord).color, coord);
        }
    }

    for slot in 1..=SLOT_COUNT {
        if let (Ok(coord), Ok(color)) = (
            board.coordinate_of_slot(slot),
            board.circle_color_of_slot(slot),
        ) {
            tables.circles.record(color, coord);
        }
    }

    tables
}
