// File: ./src/model/item.rs
// Persisted document and the records it holds
use crate::error::{HelperError, HelperResult};
use crate::model::role::SchoolDay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeworkItem {
    pub subject: String,
    pub task: String,
    #[serde(default)]
    pub completed: bool,
}

impl HomeworkItem {
    pub fn new(subject: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            task: task.into(),
            completed: false,
        }
    }

    pub fn status_glyph(&self) -> &'static str {
        if self.completed { "✓" } else { "✗" }
    }
}

/// Deadline-bearing task kept only for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub subject: String,
    pub task: String,
    pub deadline: NaiveDate,
}

impl Assignment {
    pub fn new(subject: impl Into<String>, task: impl Into<String>, deadline: NaiveDate) -> Self {
        Self {
            subject: subject.into(),
            task: task.into(),
            deadline,
        }
    }
}

/// Everything written to the data file. Missing keys load as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolData {
    pub schedule: BTreeMap<String, Vec<String>>,
    pub homework: Vec<HomeworkItem>,
}

impl SchoolData {
    /// Replaces the subject list for `day`. Blank entries are dropped first.
    pub fn set_schedule(&mut self, day: SchoolDay, subjects: Vec<String>) -> HelperResult<()> {
        let subjects: Vec<String> = subjects
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if subjects.is_empty() {
            return Err(HelperError::EmptySubjects);
        }
        self.schedule.insert(day.key().to_string(), subjects);
        Ok(())
    }

    pub fn schedule_for(&self, day: SchoolDay) -> Option<&[String]> {
        self.schedule
            .get(day.key())
            .map(Vec::as_slice)
            .filter(|subjects| !subjects.is_empty())
    }

    pub fn add_homework(&mut self, subject: &str, task: &str) -> HelperResult<&HomeworkItem> {
        let subject = subject.trim();
        let task = task.trim();
        if subject.is_empty() || task.is_empty() {
            return Err(HelperError::EmptyHomework);
        }
        self.homework.push(HomeworkItem::new(subject, task));
        Ok(&self.homework[self.homework.len() - 1])
    }

    /// Maps a 1-based position from the displayed list to a vector index.
    pub fn homework_index(&self, position: i64) -> HelperResult<usize> {
        let len = self.homework.len();
        match usize::try_from(position) {
            Ok(p) if (1..=len).contains(&p) => Ok(p - 1),
            _ => Err(HelperError::IndexOutOfRange {
                index: position.max(0) as usize,
                len,
            }),
        }
    }

    pub fn mark_completed(&mut self, position: i64) -> HelperResult<&HomeworkItem> {
        let idx = self.homework_index(position)?;
        let item = &mut self.homework[idx];
        item.completed = true;
        Ok(item)
    }

    pub fn delete_homework(&mut self, position: i64) -> HelperResult<HomeworkItem> {
        let idx = self.homework_index(position)?;
        Ok(self.homework.remove(idx))
    }
}
