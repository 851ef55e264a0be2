//! Transport tasks and the ordered task list.

use crate::coord::GridCoord;
use crate::error::BingoError;

/// "The block currently at `source` must end at `destination`."
///
/// # Example
///
/// ```
/// use bingo_types::{GridCoord, TransportTask};
///
/// let task = TransportTask::new(GridCoord::new(1, 1), GridCoord::new(1, 5));
/// assert_eq!(task.distance(), 4);
/// assert!(!task.is_in_place());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransportTask {
    /// Where the block is now.
    pub source: GridCoord,
    /// Where the block has to go.
    pub destination: GridCoord,
}

impl TransportTask {
    /// Creates a task.
    #[must_use]
    pub const fn new(source: GridCoord, destination: GridCoord) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Manhattan distance between source and destination.
    #[must_use]
    pub const fn distance(&self) -> u32 {
        self.source.manhattan_distance(self.destination)
    }

    /// Returns `true` if the block already sits on its destination.
    #[must_use]
    pub fn is_in_place(&self) -> bool {
        self.source == self.destination
    }
}

impl std::fmt::Display for TransportTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.source, self.destination)
    }
}

/// Ordered transport tasks whose head is always the black task.
///
/// The head can be read but never removed, so every list keeps at least one
/// entry. Colored tasks follow in increasing color order.
///
/// # Example
///
/// ```
/// use bingo_types::{GridCoord, TaskList, TransportTask};
///
/// let black = TransportTask::new(GridCoord::new(3, 3), GridCoord::new(1, 1));
/// let mut tasks = TaskList::new(black);
/// tasks.push(TransportTask::new(GridCoord::new(0, 0), GridCoord::new(1, 3)));
///
/// assert_eq!(tasks.len(), 2);
/// assert_eq!(tasks.remove(0), None);
/// assert!(tasks.remove(1).is_some());
/// assert_eq!(tasks.black(), &black);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<TransportTask>", into = "Vec<TransportTask>")
)]
pub struct TaskList {
    tasks: Vec<TransportTask>,
}

impl TaskList {
    /// Creates a list holding only the black task.
    #[must_use]
    pub fn new(black: TransportTask) -> Self {
        Self {
            tasks: vec![black],
        }
    }

    /// Appends a colored task.
    pub fn push(&mut self, task: TransportTask) {
        self.tasks.push(task);
    }

    /// The black task at index 0.
    #[must_use]
    pub fn black(&self) -> &TransportTask {
        &self.tasks[0]
    }

    /// Number of tasks, black task included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Always `false`; the black task is never removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns `true` while at least one colored task remains.
    #[must_use]
    pub fn has_colored(&self) -> bool {
        self.tasks.len() > 1
    }

    /// Returns the task at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TransportTask> {
        self.tasks.get(index)
    }

    /// Removes and returns a colored task.
    ///
    /// Returns `None` for index 0 or an out-of-range index.
    pub fn remove(&mut self, index: usize) -> Option<TransportTask> {
        if index == 0 || index >= self.tasks.len() {
            return None;
        }
        Some(self.tasks.remove(index))
    }

    /// All tasks as a slice, black task first.
    #[must_use]
    pub fn as_slice(&self) -> &[TransportTask] {
        &self.tasks
    }

    /// Colored tasks only.
    #[must_use]
    pub fn colored(&self) -> &[TransportTask] {
        &self.tasks[1..]
    }

    /// Iterates over all tasks, black task first.
    pub fn iter(&self) -> impl Iterator<Item = &TransportTask> {
        self.tasks.iter()
    }
}

impl TryFrom<Vec<TransportTask>> for TaskList {
    type Error = BingoError;

    /// Takes the first task as the black task.
    ///
    /// # Errors
    ///
    /// Returns [`BingoError::MissingBlackBlock`] for an empty vector.
    fn try_from(tasks: Vec<TransportTask>) -> Result<Self, Self::Error> {
        if tasks.is_empty() {
            return Err(BingoError::MissingBlackBlock);
        }
        Ok(Self { tasks })
    }
}

impl From<TaskList> for Vec<TransportTask> {
    fn from(list: TaskList) -> Self {
        list.tasks
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a TransportTask;
    type IntoIter = std::slice::Iter<'a, TransportTask>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn black() -> TransportTask {
        TransportTask::new(GridCoord::new(3, 3), GridCoord::new(5, 5))
    }

    #[test]
    fn test_task_in_place() {
        let c = GridCoord::new(2, 2);
        assert!(TransportTask::new(c, c).is_in_place());
        assert_eq!(TransportTask::new(c, c).distance(), 0);
    }

    #[test]
    fn test_task_display() {
        let task = TransportTask::new(GridCoord::new(1, 1), GridCoord::new(1, 5));
        assert_eq!(task.to_string(), "(1,1)->(1,5)");
    }

    #[test]
    fn test_list_head_is_fixed() {
        let mut tasks = TaskList::new(black());
        assert!(!tasks.has_colored());
        assert_eq!(tasks.remove(0), None);
        assert_eq!(tasks.len(), 1);
        assert!(!tasks.is_empty());
        assert!(tasks.colored().is_empty());
    }

    #[test]
    fn test_list_remove_keeps_order() {
        let mut tasks = TaskList::new(black());
        let a = TransportTask::new(GridCoord::new(0, 0), GridCoord::new(1, 1));
        let b = TransportTask::new(GridCoord::new(0, 2), GridCoord::new(1, 3));
        let c = TransportTask::new(GridCoord::new(0, 4), GridCoord::new(1, 5));
        tasks.push(a);
        tasks.push(b);
        tasks.push(c);

        assert_eq!(tasks.remove(2), Some(b));
        assert_eq!(tasks.as_slice(), &[black(), a, c]);
        assert_eq!(tasks.remove(5), None);
        assert_eq!(tasks.get(2), Some(&c));
        assert_eq!((&tasks).into_iter().count(), 3);
    }

    #[test]
    fn test_list_from_vec_requires_black_task() {
        assert!(matches!(
            TaskList::try_from(Vec::new()),
            Err(BingoError::MissingBlackBlock)
        ));

        let tasks = TaskList::try_from(vec![black()]).unwrap();
        assert_eq!(tasks.black(), &black());
        assert_eq!(Vec::from(tasks), vec![black()]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_list_json_rejects_empty() {
        assert!(serde_json::from_str::<TaskList>("[]").is_err());

        let json = r#"[{ "source": { "x": 3, "y": 3 }, "destination": { "x": 5, "y": 5 } }]"#;
        let tasks: TaskList = serde_json::from_str(json).unwrap();
        assert_eq!(tasks.black(), &black());
        assert!(tasks.colored().is_empty());
    }
}
