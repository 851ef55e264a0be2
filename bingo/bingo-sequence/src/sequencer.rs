//! The run state machine.
//!
//! A run moves through five phases:
//!
//! ```text
//! NotEntered ──► Fetching ⇄ Delivering
//!                   │
//!                   ▼
//!                Parking ──► Done
//! ```
//!
//! - **NotEntered**: reset the board, plan the tasks, and enter the area
//!   toward the nearest colored task.
//! - **Fetching**: pick the next task and drive to its block.
//! - **Delivering**: push the block to its circle. The robot stops one cell
//!   short of the destination.
//! - **Parking**: drive to the parking cell and turn to the final heading.
//!
//! The fetch/deliver loop runs while more than one task is listed. The
//! selector never picks the black task at index 0, so the loop ends with the
//! black task still listed; it is reported in
//! [`RunReport::remaining`](crate::RunReport::remaining) and never executed.

use bingo_plan::{plan_from_board, select_next};
use bingo_types::{
    BingoBoard, BingoError, CourseConfig, Direction, GridCoord, GridPath, MotionCommand, TaskList,
    TransportTask,
};
use tracing::{debug, info, warn};

use crate::collaborator::{MotionSynthesizer, Navigator, PathFinder};
use crate::report::{Entry, RunReport};

/// Phase of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Not yet planned or entered.
    #[default]
    NotEntered,
    /// About to drive to the next block.
    Fetching,
    /// Holding a task whose block is about to be delivered.
    Delivering,
    /// All colored tasks done; about to park.
    Parking,
    /// Parked and aligned.
    Done,
}

/// Drives a single bingo run over a board.
///
/// # Example
///
/// ```
/// use bingo_sequence::{MotionSynthesizer, Navigator, PathFinder, Phase, Sequencer};
/// use bingo_types::{
///     BingoArea, BingoBoard, Color, CourseConfig, CourseSide, Direction, GridCoord, GridPath,
///     MotionCommand,
/// };
///
/// struct Direct;
/// impl<B: BingoBoard + ?Sized> PathFinder<B> for Direct {
///     fn find_path(&mut self, _: &B, from: GridCoord, to: GridCoord) -> GridPath {
///         GridPath::new(vec![from, to])
///     }
/// }
///
/// struct Hold;
/// impl<B: BingoBoard + ?Sized> MotionSynthesizer<B> for Hold {
///     fn to_motion_commands(&mut self, board: &B, _: &GridPath) -> (Vec<MotionCommand>, Direction) {
///         (vec![MotionCommand::Straight], board.heading())
///     }
/// }
///
/// struct Idle;
/// impl Navigator for Idle {
///     fn enter_straight(&mut self) {}
///     fn enter_left(&mut self) {}
///     fn enter_right(&mut self) {}
///     fn execute(&mut self, _: &[MotionCommand]) {}
/// }
///
/// let slots = [
///     Color::Red, Color::Yellow, Color::Blue, Color::Green,
///     Color::Green, Color::Blue, Color::Yellow, Color::Red,
/// ];
/// let mut area = BingoArea::new(slots, 1);
/// area.place_block(GridCoord::new(3, 3), Color::Black).unwrap();
///
/// let config = CourseConfig::for_side(CourseSide::Left);
/// let mut sequencer = Sequencer::new(config, Direct, Hold, Idle);
/// let report = sequencer.run(&mut area).unwrap();
/// assert!(report.executed().is_empty());
///
/// assert_eq!(sequencer.phase(), Phase::Done);
/// assert_eq!(area.heading(), Direction::South);
/// ```
pub struct Sequencer<P, M, N> {
    config: CourseConfig,
    path_finder: P,
    motion: M,
    navigator: N,
    phase: Phase,
    tasks: Option<TaskList>,
    current: Option<TransportTask>,
    report: RunReport,
}

impl<P, M, N> Sequencer<P, M, N> {
    /// Creates a sequencer in the `NotEntered` phase.
    #[must_use]
    pub fn new(config: CourseConfig, path_finder: P, motion: M, navigator: N) -> Self {
        Self {
            config,
            path_finder,
            motion,
            navigator,
            phase: Phase::NotEntered,
            tasks: None,
            current: None,
            report: RunReport::default(),
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the course configuration.
    #[must_use]
    pub const fn config(&self) -> &CourseConfig {
        &self.config
    }

    /// Returns the tasks still listed, once planned.
    #[must_use]
    pub const fn tasks(&self) -> Option<&TaskList> {
        self.tasks.as_ref()
    }

    /// Returns the report so far.
    #[must_use]
    pub const fn report(&self) -> &RunReport {
        &self.report
    }

    /// Returns the task held between fetch and delivery.
    #[must_use]
    pub const fn current(&self) -> Option<TransportTask> {
        self.current
    }

    /// Returns the navigator.
    #[must_use]
    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Consumes the sequencer, returning its collaborators.
    pub fn into_parts(self) -> (P, M, N) {
        (self.path_finder, self.motion, self.navigator)
    }
}

impl<P, M, N> Sequencer<P, M, N>
where
    N: Navigator,
{
    /// Runs every remaining phase until `Done`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Sequencer::step`].
    pub fn run<B>(&mut self, board: &mut B) -> Result<&RunReport, BingoError>
    where
        B: BingoBoard + ?Sized,
        P: PathFinder<B>,
        M: MotionSynthesizer<B>,
    {
        while self.phase != Phase::Done {
            self.step(board)?;
        }
        Ok(&self.report)
    }

    /// Advances exactly one phase transition and returns the new phase.
    ///
    /// Stepping a finished run is a no-op.
    ///
    /// # Errors
    ///
    /// - [`BingoError::InvalidConfig`] if the course configuration is invalid
    /// - any planning fault from [`bingo_plan::plan_transport`]
    /// - [`BingoError::PathTooShort`] if a delivery path has fewer than two cells
    /// - any error from [`BingoBoard::move_block`]
    pub fn step<B>(&mut self, board: &mut B) -> Result<Phase, BingoError>
    where
        B: BingoBoard + ?Sized,
        P: PathFinder<B>,
        M: MotionSynthesizer<B>,
    {
        self.phase = match self.phase {
            Phase::NotEntered => self.enter(board)?,
            Phase::Fetching => self.fetch(board),
            Phase::Delivering => self.deliver(board)?,
            Phase::Parking => self.park(board),
            Phase::Done => Phase::Done,
        };
        Ok(self.phase)
    }

    fn enter<B>(&mut self, board: &mut B) -> Result<Phase, BingoError>
    where
        B: BingoBoard + ?Sized,
    {
        self.config.ensure_valid()?;

        board.reset_to_initial_state();
        let tasks = plan_from_board(&*board)?;
        self.report = RunReport::new(tasks.len());

        let nearest_column = select_next(&*board, &tasks)
            .and_then(|index| tasks.get(index))
            .map(|task| task.source.x);
        let entrance = self.config.entrance_column();

        let entry = match nearest_column {
            Some(column) if column < entrance => Entry::Left,
            Some(column) if column > entrance => Entry::Right,
            _ => Entry::Straight,
        };
        let heading = match entry {
            Entry::Straight => {
                self.navigator.enter_straight();
                Direction::North
            }
            Entry::Left => {
                self.navigator.enter_left();
                Direction::NorthWest
            }
            Entry::Right => {
                self.navigator.enter_right();
                Direction::NorthEast
            }
        };
        let position = entry_cell(&self.config, entry);
        board.set_heading(heading);
        board.set_position(position);
        self.report.set_entry(entry);

        info!(?entry, %position, tasks = tasks.len(), "Entered bingo area");
        self.tasks = Some(tasks);
        Ok(Phase::Fetching)
    }

    fn fetch<B>(&mut self, board: &mut B) -> Phase
    where
        B: BingoBoard + ?Sized,
        P: PathFinder<B>,
        M: MotionSynthesizer<B>,
    {
        let Some(tasks) = self.tasks.as_mut().filter(|tasks| tasks.has_colored()) else {
            return Phase::Parking;
        };
        let Some(task) = select_next(&*board, tasks).and_then(|index| tasks.remove(index)) else {
            return Phase::Parking;
        };

        let path = self
            .path_finder
            .find_path(&*board, board.position(), task.source);
        debug!(%task, %path, "Fetch path");

        let heading = self.drive(&*board, &path);
        board.set_position(task.source);
        board.set_heading(heading);

        self.current = Some(task);
        Phase::Delivering
    }

    fn deliver<B>(&mut self, board: &mut B) -> Result<Phase, BingoError>
    where
        B: BingoBoard + ?Sized,
        P: PathFinder<B>,
        M: MotionSynthesizer<B>,
    {
        let Some(task) = self.current else {
            return Ok(Phase::Fetching);
        };

        let path = self
            .path_finder
            .find_path(&*board, task.source, task.destination);
        let stop = *path.second_to_last().ok_or(BingoError::PathTooShort {
            from: task.source,
            to: task.destination,
            len: path.len(),
        })?;

        let heading = self.drive(&*board, &path);
        board.set_position(stop);
        board.set_heading(heading);
        board.move_block(task.source, task.destination)?;
        self.current = None;

        debug!(%task, %stop, ?heading, "Delivered block");
        self.report.record_delivery(task);
        Ok(Phase::Fetching)
    }

    fn park<B>(&mut self, board: &mut B) -> Phase
    where
        B: BingoBoard + ?Sized,
        P: PathFinder<B>,
        M: MotionSynthesizer<B>,
    {
        let parking = self.config.parking();
        let path = self.path_finder.find_path(&*board, board.position(), parking);
        let heading = self.drive(&*board, &path);
        // The robot ends on the parking cell, not on the last fetched source.
        board.set_position(parking);
        board.set_heading(heading);

        let final_heading = self.config.final_heading();
        let rotations = MotionCommand::rotations(board.rotation_count(heading, final_heading));
        self.navigator.execute(&rotations);
        self.report.record_commands(rotations.len());
        board.set_heading(final_heading);

        let remaining = self
            .tasks
            .as_ref()
            .map(|tasks| tasks.as_slice().to_vec())
            .unwrap_or_default();
        if let Some(black) = self.tasks.as_ref().map(TaskList::black) {
            warn!(%black, "Black task left unexecuted");
        }
        self.report.set_remaining(remaining);

        info!(
            delivered = self.report.executed().len(),
            commands = self.report.motion_commands(),
            position = %parking,
            "Run complete"
        );
        Phase::Done
    }

    fn drive<B>(&mut self, board: &B, path: &GridPath) -> Direction
    where
        B: BingoBoard + ?Sized,
        M: MotionSynthesizer<B>,
    {
        let (commands, heading) = self.motion.to_motion_commands(board, path);
        self.navigator.execute(&commands);
        self.report.record_commands(commands.len());
        heading
    }
}

/// Cell the robot occupies after the entry maneuver for `entry`.
#[must_use]
pub const fn entry_cell(config: &CourseConfig, entry: Entry) -> GridCoord {
    match entry {
        Entry::Straight => config.straight_entry(),
        Entry::Left => config.left_entry(),
        Entry::Right => config.right_entry(),
    }
}
