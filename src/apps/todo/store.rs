use thiserror::Error;

/// Maximum number of tasks the store will hold.
pub const MAX_TASKS: usize = 10;

/// Maximum task text length in characters; longer input is truncated.
pub const TASK_TEXT_LEN: usize = 63;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("task list full")]
pub struct StoreFull;

/// A single task with a text description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    text: String,
}

impl Task {
    /// Copies `text`, keeping at most [`TASK_TEXT_LEN`] characters.
    fn new(text: &str) -> Self {
        Self {
            text: text.chars().take(TASK_TEXT_LEN).collect(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Fixed-capacity task list, insertion order preserved.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::with_capacity(MAX_TASKS),
        }
    }

    /// Appends a task, truncating the text to the storage bound.
    /// Once the store holds [`MAX_TASKS`] entries the append is rejected
    /// and the store is left untouched.
    pub fn append(&mut self, text: &str) -> Result<(), StoreFull> {
        if self.tasks.len() >= MAX_TASKS {
            return Err(StoreFull);
        }
        self.tasks.push(Task::new(text));
        Ok(())
    }

    /// Stored tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }
}
