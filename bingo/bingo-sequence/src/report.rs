//! Summary of a sequencing run.
//!
//! # Example
//!
//! ```
//! use bingo_sequence::{Entry, RunReport};
//! use bingo_types::{GridCoord, TransportTask};
//!
//! let mut report = RunReport::new(3);
//! report.set_entry(Entry::Left);
//! report.record_delivery(TransportTask::new(GridCoord::new(1, 5), GridCoord::new(5, 5)));
//! report.record_commands(6);
//!
//! assert_eq!(report.entry(), Some(Entry::Left));
//! assert_eq!(report.executed().len(), 1);
//! assert_eq!(report.motion_commands(), 6);
//! ```

use bingo_types::TransportTask;

/// Which entry maneuver was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entry {
    /// Straight in at the entrance column.
    Straight,
    /// Angled in one column to the left.
    Left,
    /// Angled in one column to the right.
    Right,
}

/// What happened during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    /// Tasks in the plan, black task included.
    planned: usize,
    /// Entry maneuver, once entered.
    entry: Option<Entry>,
    /// Delivered tasks in execution order.
    executed: Vec<TransportTask>,
    /// Tasks still in the list when the loop ended.
    remaining: Vec<TransportTask>,
    /// Motion commands handed to the navigator.
    motion_commands: usize,
}

impl RunReport {
    /// Creates an empty report for a plan of `planned` tasks.
    #[must_use]
    pub fn new(planned: usize) -> Self {
        Self {
            planned,
            ..Self::default()
        }
    }

    /// Records the entry maneuver.
    pub const fn set_entry(&mut self, entry: Entry) {
        self.entry = Some(entry);
    }

    /// Records a completed delivery.
    pub fn record_delivery(&mut self, task: TransportTask) {
        self.executed.push(task);
    }

    /// Adds to the motion command count.
    pub const fn record_commands(&mut self, count: usize) {
        self.motion_commands = self.motion_commands.saturating_add(count);
    }

    /// Records the tasks left over when the loop ended.
    pub fn set_remaining(&mut self, remaining: Vec<TransportTask>) {
        self.remaining = remaining;
    }

    /// Number of planned tasks, black task included.
    #[must_use]
    pub const fn planned(&self) -> usize {
        self.planned
    }

    /// The entry maneuver, if the robot has entered.
    #[must_use]
    pub const fn entry(&self) -> Option<Entry> {
        self.entry
    }

    /// Delivered tasks in execution order.
    #[must_use]
    pub fn executed(&self) -> &[TransportTask] {
        &self.executed
    }

    /// Tasks left in the list after the fetch/deliver loop.
    ///
    /// The loop stops once only one task is left, so a finished run reports
    /// the black task here.
    #[must_use]
    pub fn remaining(&self) -> &[TransportTask] {
        &self.remaining
    }

    /// Total motion commands executed, rotations during parking included.
    #[must_use]
    pub const fn motion_commands(&self) -> usize {
        self.motion_commands
    }
}
