//! Contracts for the collaborators the sequencer delegates to.
//!
//! The sequencer owns the order of operations and the logical pose; it
//! never finds paths, turns paths into motions, or moves the robot itself.
//!
//! Path finders and motion synthesizers are generic over the board type so
//! an implementation can read occupancy or the current heading from it.

use bingo_types::{Direction, GridCoord, GridPath, MotionCommand};

/// Finds a path between two cells.
pub trait PathFinder<B: ?Sized> {
    /// Returns a path from `from` to `to`, inclusive of both endpoints.
    ///
    /// Implementations should route around blocks currently on `board`.
    fn find_path(&mut self, board: &B, from: GridCoord, to: GridCoord) -> GridPath;
}

/// Converts a path into primitive motions.
pub trait MotionSynthesizer<B: ?Sized> {
    /// Returns the commands that drive `path` and the heading after the last one.
    fn to_motion_commands(&mut self, board: &B, path: &GridPath) -> (Vec<MotionCommand>, Direction);
}

/// Drives the robot.
///
/// Every call blocks until the physical or simulated motion has finished.
/// Failures are handled below this interface and never reported upward.
pub trait Navigator {
    /// Enters the area straight ahead.
    fn enter_straight(&mut self);

    /// Enters the area angled one column to the left.
    fn enter_left(&mut self);

    /// Enters the area angled one column to the right.
    fn enter_right(&mut self);

    /// Executes a command sequence.
    fn execute(&mut self, commands: &[MotionCommand]);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn enter_straight(&mut self) {
        (**self).enter_straight();
    }

    fn enter_left(&mut self) {
        (**self).enter_left();
    }

    fn enter_right(&mut self) {
        (**self).enter_right();
    }

    fn execute(&mut self, commands: &[MotionCommand]) {
        (**self).execute(commands);
    }
}
