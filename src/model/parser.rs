// File: ./src/model/parser.rs
// Turns raw prompt answers into typed values
use crate::error::{HelperError, HelperResult};
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Splits "Math, Physics ,Art" into trimmed, non-empty subject names.
pub fn split_subjects(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// 1-based list position. Range is checked by the list owner.
pub fn parse_position(input: &str) -> HelperResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| HelperError::NotANumber(input.trim().to_string()))
}

pub fn parse_grade(input: &str) -> HelperResult<f64> {
    input
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| HelperError::GradeNotANumber(input.trim().to_string()))
}

pub fn parse_deadline(input: &str) -> HelperResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| HelperError::InvalidDate(input.trim().to_string()))
}

/// Whole grades keep one decimal ("4.0"), others print as-is ("4.25").
pub fn format_grade(grade: f64) -> String {
    if grade.fract() == 0.0 {
        format!("{:.1}", grade)
    } else {
        grade.to_string()
    }
}

pub fn format_grades(grades: &[f64]) -> String {
    grades
        .iter()
        .map(|g| format_grade(*g))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
