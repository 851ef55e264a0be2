//! Grid paths returned by the path-finding collaborator.
//!
//! A [`GridPath`] is an ordered list of cells, inclusive of both endpoints.
//!
//! # Example
//!
//! ```
//! use bingo_types::{GridCoord, GridPath};
//!
//! let path = GridPath::new(vec![
//!     GridCoord::new(1, 1),
//!     GridCoord::new(1, 2),
//!     GridCoord::new(1, 3),
//! ]);
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.second_to_last(), Some(&GridCoord::new(1, 2)));
//! ```

use crate::coord::GridCoord;

/// A discrete path through grid cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPath {
    coords: Vec<GridCoord>,
}

impl GridPath {
    /// Creates a path from a sequence of coordinates.
    #[must_use]
    pub const fn new(coords: Vec<GridCoord>) -> Self {
        Self { coords }
    }

    /// Creates a single-cell path.
    #[must_use]
    pub fn from_single(coord: GridCoord) -> Self {
        Self {
            coords: vec![coord],
        }
    }

    /// Number of cells in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns `true` if the path has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The cells as a slice.
    #[must_use]
    pub fn coords(&self) -> &[GridCoord] {
        &self.coords
    }

    /// First cell.
    #[must_use]
    pub fn first(&self) -> Option<&GridCoord> {
        self.coords.first()
    }

    /// Last cell.
    #[must_use]
    pub fn last(&self) -> Option<&GridCoord> {
        self.coords.last()
    }

    /// The cell just before the last one.
    ///
    /// After a delivery the robot stops here: the final move pushes the block
    /// into the destination while the robot stays one cell short.
    #[must_use]
    pub fn second_to_last(&self) -> Option<&GridCoord> {
        self.coords.len().checked_sub(2).and_then(|i| self.coords.get(i))
    }

    /// Iterates over consecutive `(from, to)` pairs.
    pub fn segments(&self) -> impl Iterator<Item = (&GridCoord, &GridCoord)> {
        self.coords.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Iterates over the cells.
    pub fn iter(&self) -> impl Iterator<Item = &GridCoord> {
        self.coords.iter()
    }
}

impl FromIterator<GridCoord> for GridPath {
    fn from_iter<I: IntoIterator<Item = GridCoord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for GridPath {
    type Item = GridCoord;
    type IntoIter = std::vec::IntoIter<GridCoord>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.into_iter()
    }
}

impl std::fmt::Display for GridPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, coord) in self.coords.iter().enumerate() {
            if i > 0 {
                f.write_str("→")?;
            }
            write!(f, "{coord}")?;
        }
        Ok(())
    }
}
