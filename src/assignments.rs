// File: ./src/assignments.rs
// In-memory assignment list with deadline reminders
use crate::model::Assignment;
use chrono::{Duration, NaiveDate};

#[derive(Debug, Clone, Default)]
pub struct AssignmentList {
    items: Vec<Assignment>,
}

impl AssignmentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three examples every session starts with.
    pub fn seeded() -> Self {
        let seed = [
            ("Math", "Solve equations", (2024, 12, 18)),
            ("English", "Read the book", (2024, 12, 20)),
            ("History", "Write essay", (2024, 12, 25)),
        ];
        let items = seed
            .into_iter()
            .filter_map(|(subject, task, (y, m, d))| {
                NaiveDate::from_ymd_opt(y, m, d).map(|date| Assignment::new(subject, task, date))
            })
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.items.iter()
    }

    pub fn add(&mut self, assignment: Assignment) {
        tracing::debug!(task = %assignment.task, deadline = %assignment.deadline, "assignment added");
        self.items.push(assignment);
    }

    /// Drops every assignment whose task equals `task`. Returns how many went.
    pub fn remove_by_task(&mut self, task: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|a| a.task != task);
        before - self.items.len()
    }

    /// Assignments due on or before `today + window_days`, overdue ones included.
    pub fn upcoming(&self, today: NaiveDate, window_days: i64) -> Vec<&Assignment> {
        let horizon = Duration::try_days(window_days)
            .and_then(|window| today.checked_add_signed(window))
            .unwrap_or(if window_days < 0 { NaiveDate::MIN } else { NaiveDate::MAX });
        self.items.iter().filter(|a| a.deadline <= horizon).collect()
    }
}
