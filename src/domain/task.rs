use chrono::{DateTime, Local};
use uuid::Uuid;

/// Priority of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Short badge for the list pane
    pub fn badge(&self) -> &'static str {
        match self {
            Priority::Low => " · ",
            Priority::Medium => " ! ",
            Priority::High => "!!!",
        }
    }

    /// Cycle to the next priority (Low → Medium → High → Low)
    pub fn next(&self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }
}

/// A task in the todo list
#[derive(Debug, Clone)]
pub struct TodoItem {
    /// Unique ID, also used as the timer's linked-task reference
    pub id: Uuid,
    pub title: String,
    /// Multi-line notes
    pub notes: String,
    pub priority: Priority,
    pub completed: bool,
    pub created_at: DateTime<Local>,
    /// How many work intervals the task is expected to take
    pub estimated_intervals: u32,
    /// How many work intervals have been completed against this task
    pub completed_intervals: u32,
}

impl TodoItem {
    pub fn new(title: String, notes: String, priority: Priority) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            notes,
            priority,
            completed: false,
            created_at: Local::now(),
            estimated_intervals: 1,
            completed_intervals: 0,
        }
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// Bump the task-side interval tally. Called when the timer finishes a
    /// work interval while this task is linked.
    pub fn increment_completed_intervals(&mut self) {
        self.completed_intervals += 1;
    }

    /// Interval tally as "completed/estimated" for the list pane
    pub fn interval_tally(&self) -> String {
        format!("{}/{}", self.completed_intervals, self.estimated_intervals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = TodoItem::new("Write docs".to_string(), String::new(), Priority::Medium);
        assert!(!item.completed);
        assert_eq!(item.estimated_intervals, 1);
        assert_eq!(item.completed_intervals, 0);
    }

    #[test]
    fn test_toggle_completed() {
        let mut item = TodoItem::new("Task".to_string(), String::new(), Priority::Low);
        item.toggle_completed();
        assert!(item.completed);
        item.toggle_completed();
        assert!(!item.completed);
    }

    #[test]
    fn test_increment_completed_intervals() {
        let mut item = TodoItem::new("Task".to_string(), String::new(), Priority::High);
        item.increment_completed_intervals();
        item.increment_completed_intervals();
        assert_eq!(item.completed_intervals, 2);
        assert_eq!(item.interval_tally(), "2/1");
    }

    #[test]
    fn test_priority_cycle() {
        assert_eq!(Priority::Low.next(), Priority::Medium);
        assert_eq!(Priority::Medium.next(), Priority::High);
        assert_eq!(Priority::High.next(), Priority::Low);
    }
}
