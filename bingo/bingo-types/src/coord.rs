//! Grid coordinate types.

/// Side length of the square bingo area, in cells.
pub const AREA_SIZE: i32 = 7;

/// A discrete 2D cell coordinate on the bingo area.
///
/// `x` is the column and `y` the row. Row 0 is the far edge of the area and
/// row `AREA_SIZE - 1` the edge the robot enters from.
///
/// # Example
///
/// ```
/// use bingo_types::GridCoord;
///
/// let coord = GridCoord::new(1, 6);
/// assert_eq!(coord.x, 1);
/// assert_eq!(coord.y, 6);
/// assert!(coord.in_area());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl GridCoord {
    /// Creates a new grid coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a coordinate at the origin (0, 0).
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Returns the coordinate as a tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Returns `true` if the coordinate lies inside the `AREA_SIZE × AREA_SIZE` area.
    #[must_use]
    pub const fn in_area(self) -> bool {
        self.x >= 0 && self.x < AREA_SIZE && self.y >= 0 && self.y < AREA_SIZE
    }

    /// Computes the Manhattan distance to another coordinate.
    ///
    /// This is the only distance metric used for pairing and task selection.
    ///
    /// # Example
    ///
    /// ```
    /// use bingo_types::GridCoord;
    ///
    /// let a = GridCoord::new(1, 1);
    /// let b = GridCoord::new(5, 1);
    /// assert_eq!(a.manhattan_distance(b), 4);
    /// ```
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.saturating_add(dy)
    }

    /// Iterates every cell of the area in row-major order.
    ///
    /// Rows increase in the outer loop and columns in the inner loop, which
    /// is the scan order the color classifier relies on.
    ///
    /// # Example
    ///
    /// ```
    /// use bingo_types::{GridCoord, AREA_SIZE};
    ///
    /// let cells: Vec<_> = GridCoord::area_cells().collect();
    /// assert_eq!(cells.len(), (AREA_SIZE * AREA_SIZE) as usize);
    /// assert_eq!(cells[1], GridCoord::new(1, 0));
    /// ```
    pub fn area_cells() -> impl Iterator<Item = Self> {
        (0..AREA_SIZE).flat_map(|y| (0..AREA_SIZE).map(move |x| Self::new(x, y)))
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<GridCoord> for (i32, i32) {
    fn from(coord: GridCoord) -> Self {
        coord.as_tuple()
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_tuple() {
        let coord = GridCoord::new(3, 4);
        assert_eq!(coord.as_tuple(), (3, 4));
        assert_eq!(GridCoord::from((3, 4)), coord);
        assert_eq!(GridCoord::origin(), GridCoord::new(0, 0));
    }

    #[test]
    fn test_in_area() {
        assert!(GridCoord::new(0, 0).in_area());
        assert!(GridCoord::new(6, 6).in_area());
        assert!(!GridCoord::new(7, 0).in_area());
        assert!(!GridCoord::new(0, -1).in_area());
    }

    #[test]
    fn test_manhattan_distance() {
        let a = GridCoord::new(2, 6);
        assert_eq!(a.manhattan_distance(GridCoord::new(3, 6)), 1);
        assert_eq!(a.manhattan_distance(GridCoord::new(5, 3)), 6);
        assert_eq!(a.manhattan_distance(a), 0);
        assert_eq!(
            a.manhattan_distance(GridCoord::new(0, 0)),
            GridCoord::new(0, 0).manhattan_distance(a)
        );
    }

    #[test]
    fn test_area_cells_row_major() {
        let cells: Vec<_> = GridCoord::area_cells().collect();
        assert_eq!(cells.first(), Some(&GridCoord::new(0, 0)));
        assert_eq!(cells[7], GridCoord::new(0, 1));
        assert_eq!(cells.last(), Some(&GridCoord::new(6, 6)));
        assert!(cells.iter().all(|c| c.in_area()));
    }

    #[test]
    fn test_display() {
        assert_eq!(GridCoord::new(1, 6).to_string(), "(1,6)");
    }
}
