//! Tasks, columns and the board itself.

use serde::{Deserialize, Serialize};

/// Column a task sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Columns in board order.
    pub const COLUMNS: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "todo" => Some(TaskStatus::Todo),
            "in-progress" => Some(TaskStatus::InProgress),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }

    /// The column a task advances into, if any.
    pub fn next(&self) -> Option<TaskStatus> {
        match self {
            TaskStatus::Todo => Some(TaskStatus::InProgress),
            TaskStatus::InProgress => Some(TaskStatus::Done),
            TaskStatus::Done => None,
        }
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

/// One task on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub detail: String,
    pub status: TaskStatus,
    pub priority: Priority,
}

/// The board: a task list with column views and one-step mutations.
///
/// Disposable by design - the board is reseeded every request and mutations
/// arrive one at a time through the URL.
#[derive(Debug, Clone, Default)]
pub struct Board {
    tasks: Vec<Task>,
    next_id: u32,
}

impl Board {
    /// Create a board from existing tasks.
    pub fn new(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self { tasks, next_id }
    }

    /// Add a task to the To Do column. Returns its id.
    pub fn add(&mut self, title: impl Into<String>, detail: impl Into<String>, priority: Priority) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            title: title.into(),
            detail: detail.into(),
            status: TaskStatus::Todo,
            priority,
        });
        id
    }

    /// Advance a task to the next column. Done tasks stay put.
    /// Returns whether the board changed.
    pub fn advance(&mut self, id: u32) -> bool {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            if let Some(next) = task.status.next() {
                task.status = next;
                return true;
            }
        }
        false
    }

    /// Move a task into a specific column.
    pub fn move_to(&mut self, id: u32, status: TaskStatus) -> bool {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            if task.status != status {
                task.status = status;
                return true;
            }
        }
        false
    }

    /// Remove a task. Returns whether a task was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let len_before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() < len_before
    }

    /// Tasks in one column, high priority first (stable within a priority).
    pub fn column(&self, status: TaskStatus) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().filter(|t| t.status == status).collect();
        tasks.sort_by(|a, b| b.priority.cmp(&a.priority));
        tasks
    }

    /// Number of tasks in a column.
    pub fn count(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// The board every request starts from.
pub fn seed_board() -> Board {
    Board::new(vec![
        Task {
            id: 1,
            title: "Sketch hero section".to_string(),
            detail: "Rough layout for the landing hero".to_string(),
            status: TaskStatus::Done,
            priority: Priority::Medium,
        },
        Task {
            id: 2,
            title: "Wire up contact form".to_string(),
            detail: "Hook the form to the email service".to_string(),
            status: TaskStatus::InProgress,
            priority: Priority::High,
        },
        Task {
            id: 3,
            title: "Write first blog post".to_string(),
            detail: "Draft the build-log post".to_string(),
            status: TaskStatus::Todo,
            priority: Priority::Medium,
        },
        Task {
            id: 4,
            title: "Compress project images".to_string(),
            detail: "WebP everything above 100kB".to_string(),
            status: TaskStatus::Todo,
            priority: Priority::Low,
        },
        Task {
            id: 5,
            title: "Fix mobile nav overlap".to_string(),
            detail: "Menu covers the theme toggle on small screens".to_string(),
            status: TaskStatus::Todo,
            priority: Priority::High,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_lands_in_todo() {
        let mut board = seed_board();
        let id = board.add("New task", "", Priority::High);

        assert_eq!(board.count(TaskStatus::Todo), 4);
        assert!(board.column(TaskStatus::Todo).iter().any(|t| t.id == id));
        // New ids never collide with seeds.
        assert_eq!(id, 6);
    }

    #[test]
    fn test_advance_walks_columns() {
        let mut board = seed_board();

        assert!(board.advance(3)); // todo -> in-progress
        assert!(board.advance(3)); // in-progress -> done
        assert!(!board.advance(3)); // done stays put

        assert_eq!(board.count(TaskStatus::Done), 2);
    }

    #[test]
    fn test_move_to_same_column_is_noop() {
        let mut board = seed_board();
        assert!(!board.move_to(3, TaskStatus::Todo));
        assert!(board.move_to(3, TaskStatus::Done));
    }

    #[test]
    fn test_remove() {
        let mut board = seed_board();
        assert!(board.remove(4));
        assert!(!board.remove(4));
        assert_eq!(board.len(), 4);
    }

    #[test]
    fn test_column_orders_by_priority() {
        let board = seed_board();
        let todo = board.column(TaskStatus::Todo);
        // High-priority task 5 floats above the medium and low ones.
        assert_eq!(todo.first().unwrap().id, 5);
        assert_eq!(todo.last().unwrap().id, 4);
    }

    #[test]
    fn test_unknown_task_mutations() {
        let mut board = seed_board();
        assert!(!board.advance(99));
        assert!(!board.move_to(99, TaskStatus::Done));
        assert!(!board.remove(99));
    }
}
