//! Robot headings and primitive motion commands.

/// One of the eight compass headings, in 45° steps.
///
/// Declaration order is clockwise starting from `North` (toward row 0).
///
/// # Example
///
/// ```
/// use bingo_types::Direction;
///
/// // Two clockwise quarter-steps from north to east.
/// assert_eq!(Direction::North.rotation_count(Direction::East), 2);
/// // The shorter way from north to west is counter-clockwise.
/// assert_eq!(Direction::North.rotation_count(Direction::West), -2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Toward decreasing rows.
    #[default]
    North,
    /// North-east diagonal.
    NorthEast,
    /// Toward increasing columns.
    East,
    /// South-east diagonal.
    SouthEast,
    /// Toward increasing rows.
    South,
    /// South-west diagonal.
    SouthWest,
    /// Toward decreasing columns.
    West,
    /// North-west diagonal.
    NorthWest,
}

impl Direction {
    /// All headings in clockwise order.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Clockwise ordinal, 0 for `North` through 7 for `NorthWest`.
    #[must_use]
    pub const fn ordinal(self) -> i32 {
        match self {
            Self::North => 0,
            Self::NorthEast => 1,
            Self::East => 2,
            Self::SouthEast => 3,
            Self::South => 4,
            Self::SouthWest => 5,
            Self::West => 6,
            Self::NorthWest => 7,
        }
    }

    /// Heading for a clockwise ordinal, wrapping modulo 8.
    #[must_use]
    pub const fn from_ordinal(ordinal: i32) -> Self {
        Self::ALL[ordinal.rem_euclid(8) as usize]
    }

    /// Signed minimal number of 45° turns from `self` to `target`.
    ///
    /// Positive counts are clockwise, negative counts counter-clockwise.
    /// The magnitude is at most 4; a half turn is reported as `+4`.
    #[must_use]
    pub const fn rotation_count(self, target: Self) -> i32 {
        let diff = (target.ordinal() - self.ordinal()).rem_euclid(8);
        if diff > 4 { diff - 8 } else { diff }
    }

    /// Unit grid step `(dx, dy)` for this heading.
    #[must_use]
    pub const fn step(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::East => (1, 0),
            Self::SouthEast => (1, 1),
            Self::South => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
        }
    }

    /// Heading of a single-cell step, or `None` if the offset is not a unit step.
    #[must_use]
    pub const fn from_step(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Self::North),
            (1, -1) => Some(Self::NorthEast),
            (1, 0) => Some(Self::East),
            (1, 1) => Some(Self::SouthEast),
            (0, 1) => Some(Self::South),
            (-1, 1) => Some(Self::SouthWest),
            (-1, 0) => Some(Self::West),
            (-1, -1) => Some(Self::NorthWest),
            _ => None,
        }
    }
}

/// A primitive motion the execution layer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionCommand {
    /// Advance one cell along the current heading.
    Straight,
    /// Turn in place 45° clockwise.
    RotateClockwise,
    /// Turn in place 45° counter-clockwise.
    RotateCounterClockwise,
}

impl MotionCommand {
    /// Unit rotations that realize a signed rotation count.
    ///
    /// # Example
    ///
    /// ```
    /// use bingo_types::MotionCommand;
    ///
    /// assert_eq!(
    ///     MotionCommand::rotations(-2),
    ///     vec![MotionCommand::RotateCounterClockwise; 2],
    /// );
    /// assert!(MotionCommand::rotations(0).is_empty());
    /// ```
    #[must_use]
    pub fn rotations(count: i32) -> Vec<Self> {
        let unit = if count >= 0 {
            Self::RotateClockwise
        } else {
            Self::RotateCounterClockwise
        };
        vec![unit; count.unsigned_abs() as usize]
    }
}
