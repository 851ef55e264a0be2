//! Course configuration.
//!
//! The competition area is mirrored between the left and right courses. The
//! side decides which column the robot enters through, where it parks and
//! which way it must face at the end of the run.
//!
//! # Example
//!
//! ```
//! use bingo_types::{CourseConfig, CourseSide, Direction, GridCoord};
//!
//! let config = CourseConfig::for_side(CourseSide::Left);
//! assert_eq!(config.entrance_column(), 2);
//! assert_eq!(config.parking(), GridCoord::new(0, 6));
//! assert_eq!(config.final_heading(), Direction::South);
//!
//! let custom = CourseConfig::for_side(CourseSide::Right).with_entrance_column(3);
//! assert!(custom.validate().is_empty());
//! ```

use crate::coord::{AREA_SIZE, GridCoord};
use crate::direction::Direction;
use crate::error::BingoError;

/// Which of the two mirrored courses the robot runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CourseSide {
    /// Left course.
    #[default]
    Left,
    /// Right course.
    Right,
}


/// Course-dependent constants for entrance and parking.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourseConfig {
    /// Course side the values were derived from.
    side: CourseSide,
    /// Column of the straight entry cell.
    entrance_column: i32,
    /// Row every entry maneuver ends on.
    entry_row: i32,
    /// Cell the robot drives to before parking.
    parking: GridCoord,
    /// Heading the robot must face when done.
    final_heading: Direction,
}

impl CourseConfig {
    /// Competition defaults for a course side.
    ///
    /// - Left: entrance column 2, parking (0, 6), final heading south
    /// - Right: entrance column 4, parking (6, 6), final heading east
    /// - Entry row 6 on both sides
    #[must_use]
    pub const fn for_side(side: CourseSide) -> Self {
        match side {
            CourseSide::Left => Self {
                side,
                entrance_column: 2,
                entry_row: AREA_SIZE - 1,
                parking: GridCoord::new(0, AREA_SIZE - 1),
                final_heading: Direction::South,
            },
            CourseSide::Right => Self {
                side,
                entrance_column: 4,
                entry_row: AREA_SIZE - 1,
                parking: GridCoord::new(AREA_SIZE - 1, AREA_SIZE - 1),
                final_heading: Direction::East,
            },
        }
    }

    /// Sets the entrance column.
    #[must_use]
    pub const fn with_entrance_column(mut self, column: i32) -> Self {
        self.entrance_column = column;
        self
    }

    /// Sets the entry row.
    #[must_use]
    pub const fn with_entry_row(mut self, row: i32) -> Self {
        self.entry_row = row;
        self
    }

    /// Sets the parking approach cell.
    #[must_use]
    pub const fn with_parking(mut self, parking: GridCoord) -> Self {
        self.parking = parking;
        self
    }

    /// Sets the final heading.
    #[must_use]
    pub const fn with_final_heading(mut self, heading: Direction) -> Self {
        self.final_heading = heading;
        self
    }

    /// Returns the course side.
    #[must_use]
    pub const fn side(&self) -> CourseSide {
        self.side
    }

    /// Returns the entrance column.
    #[must_use]
    pub const fn entrance_column(&self) -> i32 {
        self.entrance_column
    }

    /// Returns the entry row.
    #[must_use]
    pub const fn entry_row(&self) -> i32 {
        self.entry_row
    }

    /// Returns the parking approach cell.
    #[must_use]
    pub const fn parking(&self) -> GridCoord {
        self.parking
    }

    /// Returns the final heading.
    #[must_use]
    pub const fn final_heading(&self) -> Direction {
        self.final_heading
    }

    /// Cell reached by the straight entry.
    #[must_use]
    pub const fn straight_entry(&self) -> GridCoord {
        GridCoord::new(self.entrance_column, self.entry_row)
    }

    /// Cell reached by the left-angled entry.
    #[must_use]
    pub const fn left_entry(&self) -> GridCoord {
        GridCoord::new(self.entrance_column - 1, self.entry_row)
    }

    /// Cell reached by the right-angled entry.
    #[must_use]
    pub const fn right_entry(&self) -> GridCoord {
        GridCoord::new(self.entrance_column + 1, self.entry_row)
    }

    /// Validates the configuration and returns any issues.
    ///
    /// All three entry cells and the parking cell must lie inside the area.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for (name, cell) in [
            ("left entry", self.left_entry()),
            ("straight entry", self.straight_entry()),
            ("right entry", self.right_entry()),
            ("parking", self.parking),
        ] {
            if !cell.in_area() {
                issues.push(format!("{name} cell {cell} is outside the area"));
            }
        }

        issues
    }

    /// Like [`CourseConfig::validate`], but folds the issues into an error.
    ///
    /// # Errors
    ///
    /// Returns [`BingoError::InvalidConfig`] listing every issue found.
    pub fn ensure_valid(&self) -> Result<(), BingoError> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(BingoError::invalid_config(issues.join("; ")))
        }
    }
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self::for_side(CourseSide::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_left_defaults() {
        let config = CourseConfig::for_side(CourseSide::Left);
        assert_eq!(config.side(), CourseSide::Left);
        assert_eq!(config.straight_entry(), GridCoord::new(2, 6));
        assert_eq!(config.left_entry(), GridCoord::new(1, 6));
        assert_eq!(config.right_entry(), GridCoord::new(3, 6));
        assert_eq!(config.parking(), GridCoord::new(0, 6));
        assert_eq!(config.final_heading(), Direction::South);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_right_defaults() {
        let config = CourseConfig::for_side(CourseSide::Right);
        assert_eq!(config.entrance_column(), 4);
        assert_eq!(config.entry_row(), 6);
        assert_eq!(config.parking(), GridCoord::new(6, 6));
        assert_eq!(config.final_heading(), Direction::East);
        assert!(config.ensure_valid().is_ok());
    }

    #[test]
    fn test_default_is_left() {
        assert_eq!(
            CourseConfig::default(),
            CourseConfig::for_side(CourseSide::Left)
        );
        assert_eq!(CourseSide::default(), CourseSide::Left);
    }

    #[test]
    fn test_builder() {
        let config = CourseConfig::for_side(CourseSide::Left)
            .with_entrance_column(3)
            .with_entry_row(5)
            .with_parking(GridCoord::new(0, 5))
            .with_final_heading(Direction::West);
        assert_eq!(config.straight_entry(), GridCoord::new(3, 5));
        assert_eq!(config.parking(), GridCoord::new(0, 5));
        assert_eq!(config.final_heading(), Direction::West);
    }

    #[test]
    fn test_validate_reports_out_of_area() {
        let config = CourseConfig::for_side(CourseSide::Left)
            .with_entrance_column(0)
            .with_parking(GridCoord::new(7, 6));
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues[0].contains("left entry"));
        assert!(issues[1].contains("parking"));

        let error = config.ensure_valid().unwrap_err();
        assert!(error.to_string().contains("invalid configuration"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "side": "Right",
            "entrance_column": 4,
            "entry_row": 6,
            "parking": { "x": 6, "y": 6 },
            "final_heading": "East"
        }"#;
        let config: CourseConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, CourseConfig::for_side(CourseSide::Right));
    }
}
