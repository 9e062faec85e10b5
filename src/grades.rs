// File: ./src/grades.rs
// Session grade book: subject -> student -> grades, in entry order
use crate::error::{HelperError, HelperResult};
use crate::model::Role;
use crate::model::parser::{format_grade, format_grades, round2};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

pub const GRADE_RANGE: RangeInclusive<f64> = 0.0..=5.0;

#[derive(Debug, Clone, Default)]
pub struct GradeStore {
    grades: BTreeMap<String, BTreeMap<String, Vec<f64>>>,
}

impl GradeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Appends a grade. Anything outside 0..=5 (NaN included) is refused.
    pub fn add_grade(&mut self, subject: &str, student: &str, grade: f64) -> HelperResult<()> {
        let subject = subject.trim();
        let student = student.trim();
        if subject.is_empty() || student.is_empty() {
            return Err(HelperError::EmptyGradeFields);
        }
        if !GRADE_RANGE.contains(&grade) {
            return Err(HelperError::GradeOutOfRange(grade));
        }
        self.grades
            .entry(subject.to_string())
            .or_default()
            .entry(student.to_string())
            .or_default()
            .push(grade);
        tracing::debug!(subject, student, grade, "grade added");
        Ok(())
    }

    pub fn grades_for(&self, subject: &str, student: &str) -> Option<&[f64]> {
        self.grades
            .get(subject)
            .and_then(|students| students.get(student))
            .map(Vec::as_slice)
    }

    /// Every subject the student has at least one grade in.
    pub fn student_grades(&self, student: &str) -> Vec<(&str, &[f64])> {
        self.grades
            .iter()
            .filter_map(|(subject, students)| {
                students
                    .get(student)
                    .map(|grades| (subject.as_str(), grades.as_slice()))
            })
            .collect()
    }

    /// Mean of all grades per subject, across students, rounded to 2 places.
    pub fn statistics(&self) -> Vec<(&str, f64)> {
        self.grades
            .iter()
            .map(|(subject, students)| {
                let all: Vec<f64> = students.values().flatten().copied().collect();
                let average = if all.is_empty() {
                    0.0
                } else {
                    all.iter().sum::<f64>() / all.len() as f64
                };
                (subject.as_str(), round2(average))
            })
            .collect()
    }

    /// Lines to show for `role`. `parent_gate` names the subject a parent's
    /// student must appear under; `None` lets parents see any student.
    pub fn display_grades(
        &self,
        role: Role,
        student: Option<&str>,
        parent_gate: Option<&str>,
    ) -> Vec<String> {
        if self.is_empty() {
            return vec!["Оценки отсутствуют.".to_string()];
        }

        match (role, student.filter(|name| !name.trim().is_empty())) {
            (Role::Teacher, _) => {
                let mut lines = vec!["Оценки по предметам:".to_string()];
                for (subject, students) in &self.grades {
                    lines.push(format!("{subject}:"));
                    for (name, grades) in students {
                        lines.push(format!("  {name}: {}", format_grades(grades)));
                    }
                }
                lines
            }
            (Role::Parent, Some(name))
                if parent_gate.is_some_and(|gate| self.grades_for(gate, name).is_none()) =>
            {
                vec![format!("Оценки ученика {name} недоступны.")]
            }
            (Role::Student | Role::Parent, Some(name)) => {
                let mut lines = vec![format!("Оценки ученика {name}:")];
                let found = self.student_grades(name);
                if found.is_empty() {
                    lines.push("  Оценок нет.".to_string());
                }
                for (subject, grades) in found {
                    lines.push(format!("  {subject}: {}", format_grades(grades)));
                }
                lines
            }
            (Role::Student | Role::Parent, None) => Vec::new(),
        }
    }

    pub fn display_statistics(&self) -> Vec<String> {
        if self.is_empty() {
            return vec!["Статистика отсутствует, так как нет оценок.".to_string()];
        }
        let mut lines = vec!["Статистика успеваемости:".to_string()];
        for (subject, average) in self.statistics() {
            lines.push(format!("{subject}: Средний балл - {}", format_grade(average)));
        }
        lines
    }
}
