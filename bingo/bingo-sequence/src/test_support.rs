//! Deterministic collaborators for sequencer tests.

use bingo_types::{BingoBoard, Direction, GridCoord, GridPath, MotionCommand};

use crate::collaborator::{MotionSynthesizer, Navigator, PathFinder};

/// Walks along x first, then along y. Ignores blocks.
pub struct LinePathFinder;

impl<B: BingoBoard + ?Sized> PathFinder<B> for LinePathFinder {
    fn find_path(&mut self, _board: &B, from: GridCoord, to: GridCoord) -> GridPath {
        let mut coords = vec![from];
        let mut cursor = from;
        while cursor.x != to.x {
            cursor.x += (to.x - cursor.x).signum();
            coords.push(cursor);
        }
        while cursor.y != to.y {
            cursor.y += (to.y - cursor.y).signum();
            coords.push(cursor);
        }
        GridPath::new(coords)
    }
}

/// Turns toward each step, then advances one cell.
pub struct StepSynthesizer;

impl<B: BingoBoard + ?Sized> MotionSynthesizer<B> for StepSynthesizer {
    fn to_motion_commands(&mut self, board: &B, path: &GridPath) -> (Vec<MotionCommand>, Direction) {
        let mut heading = board.heading();
        let mut commands = Vec::new();
        for (a, b) in path.segments() {
            let Some(direction) = Direction::from_step(b.x - a.x, b.y - a.y) else {
                continue;
            };
            commands.extend(MotionCommand::rotations(heading.rotation_count(direction)));
            commands.push(MotionCommand::Straight);
            heading = direction;
        }
        (commands, heading)
    }
}

/// A navigator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    EnterStraight,
    EnterLeft,
    EnterRight,
    Execute(Vec<MotionCommand>),
}

/// Records every call in order.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    events: Vec<NavEvent>,
}

impl RecordingNavigator {
    pub fn events(&self) -> &[NavEvent] {
        &self.events
    }
}

impl Navigator for RecordingNavigator {
    fn enter_straight(&mut self) {
        self.events.push(NavEvent::EnterStraight);
    }

    fn enter_left(&mut self) {
        self.events.push(NavEvent::EnterLeft);
    }

    fn enter_right(&mut self) {
        self.events.push(NavEvent::EnterRight);
    }

    fn execute(&mut self, commands: &[MotionCommand]) {
        self.events.push(NavEvent::Execute(commands.to_vec()));
    }
}
