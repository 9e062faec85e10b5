// File: ./src/menu/handlers.rs
// One function per menu action. Validation problems are shown to the user
// and leave state untouched; only terminal I/O failures are returned.
use crate::error::HelperError;
use crate::menu::console::Console;
use crate::menu::state::AppState;
use crate::model::parser::{
    format_grade, parse_deadline, parse_grade, parse_position, split_subjects,
};
use crate::model::{Assignment, Role, SchoolDay};
use anyhow::Result;
use std::io::{BufRead, Write};

fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, err: &HelperError) -> Result<()> {
    tracing::debug!(error = ?err, "rejected input");
    console.error(&err.to_string())?;
    Ok(())
}

pub fn add_schedule<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<()> {
    let day_input = console.prompt("Введите день недели (например, Понедельник): ")?;
    let subjects_input = console.prompt("Введите предметы, разделённые запятой: ")?;

    let day = match day_input.parse::<SchoolDay>() {
        Ok(day) => day,
        Err(e) => return report(console, &e),
    };
    match state.data.set_schedule(day, split_subjects(&subjects_input)) {
        Ok(()) => console.success(&format!("Расписание для {day} обновлено."))?,
        Err(e) => report(console, &e)?,
    }
    Ok(())
}

pub fn view_schedule<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<()> {
    let day_input = console.prompt("Введите день недели для просмотра расписания: ")?;
    let day = day_input.parse::<SchoolDay>().ok();

    match day.and_then(|d| state.data.schedule_for(d).map(|s| (d, s))) {
        Some((day, subjects)) => {
            console.header(&format!("Расписание на {day}:"))?;
            for (idx, subject) in subjects.iter().enumerate() {
                console.line(&format!("{}. {subject}", idx + 1))?;
            }
        }
        None => {
            let name = day.map_or_else(|| day_input.trim().to_string(), |d| d.to_string());
            console.line(&format!("Для {name} расписания нет."))?;
        }
    }
    Ok(())
}

pub fn add_homework<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<()> {
    let subject = console.prompt("Введите предмет: ")?;
    let task = console.prompt("Введите задание: ")?;
    match state.data.add_homework(&subject, &task) {
        Ok(_) => console.success("Домашнее задание добавлено.")?,
        Err(e) => report(console, &e)?,
    }
    Ok(())
}

pub fn view_homework<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<()> {
    if state.data.homework.is_empty() {
        console.line("Список домашних заданий пуст.")?;
        return Ok(());
    }
    console.header("Домашние задания:")?;
    for (idx, hw) in state.data.homework.iter().enumerate() {
        console.line(&format!(
            "{}. [{}] {}: {}",
            idx + 1,
            hw.status_glyph(),
            hw.subject,
            hw.task
        ))?;
    }
    Ok(())
}

pub fn mark_homework_completed<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<()> {
    view_homework(state, console)?;
    let answer = console.prompt("Введите номер задания для отметки как выполненного: ")?;
    let outcome = parse_position(&answer).and_then(|pos| state.data.mark_completed(pos).map(|_| ()));
    match outcome {
        Ok(()) => console.success("Задание отмечено как выполненное.")?,
        Err(e) => report(console, &e)?,
    }
    Ok(())
}

pub fn delete_homework<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<()> {
    view_homework(state, console)?;
    let answer = console.prompt("Введите номер задания для удаления: ")?;
    match parse_position(&answer).and_then(|pos| state.data.delete_homework(pos)) {
        Ok(removed) => console.success(&format!(
            "Удалено задание: {} - {}",
            removed.subject, removed.task
        ))?,
        Err(e) => report(console, &e)?,
    }
    Ok(())
}

pub fn add_assignment<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<()> {
    let subject = console.prompt("Enter the subject: ")?;
    let task = console.prompt("Enter the task description: ")?;
    let deadline_input = console.prompt("Enter the deadline (YYYY-MM-DD): ")?;

    let (subject, task) = (subject.trim(), task.trim());
    if subject.is_empty() || task.is_empty() {
        return report(console, &HelperError::EmptyAssignment);
    }
    let deadline = match parse_deadline(&deadline_input) {
        Ok(date) => date,
        Err(e) => return report(console, &e),
    };

    state.assignments.add(Assignment::new(subject, task, deadline));
    console.success(&format!(
        "New task '{task}' in {subject} has been added with deadline {deadline}."
    ))?;
    Ok(())
}

pub fn remove_assignment_by_task<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<()> {
    let answer = console.prompt("Enter the name of the task to remove: ")?;
    let task_name = answer.trim();
    if state.assignments.remove_by_task(task_name) > 0 {
        console.success(&format!("Task '{task_name}' has been removed."))?;
    } else {
        console.error(&format!("Task '{task_name}' not found."))?;
    }
    Ok(())
}

pub fn view_assignments<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<()> {
    if state.assignments.is_empty() {
        console.line("No assignments available.")?;
        return Ok(());
    }
    console.header("Current assignments:")?;
    for (i, a) in state.assignments.iter().enumerate() {
        console.line(&format!(
            "{}. Subject: {}, Task: {}, Deadline: {}",
            i + 1,
            a.subject,
            a.task,
            a.deadline
        ))?;
    }
    Ok(())
}

pub fn check_deadlines<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<()> {
    let today = state.today();
    let due = state.assignments.upcoming(today, state.config.reminder_days);
    if due.is_empty() {
        console.line("No upcoming deadlines.")?;
        return Ok(());
    }
    for a in due {
        console.warn(&format!(
            "Reminder: Deadline for '{}' in {} is approaching! Due date: {}",
            a.task, a.subject, a.deadline
        ))?;
    }
    Ok(())
}

pub fn add_grade<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<()> {
    let subject = console.prompt("Введите предмет: ")?;
    let student = console.prompt("Введите имя ученика: ")?;
    let grade_input = console.prompt("Введите оценку (0-5): ")?;

    let outcome = parse_grade(&grade_input)
        .and_then(|grade| state.grades.add_grade(&subject, &student, grade).map(|_| grade));
    match outcome {
        Ok(grade) => console.success(&format!(
            "Оценка {} добавлена ученику {} по предмету '{}'.",
            format_grade(grade),
            student.trim(),
            subject.trim()
        ))?,
        Err(e) => report(console, &e)?,
    }
    Ok(())
}

pub fn show_grades<R: BufRead, W: Write>(
    role: Role,
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<()> {
    let student = match role {
        Role::Teacher => None,
        Role::Student | Role::Parent => {
            let name = console.prompt("Введите имя ученика: ")?;
            Some(name.trim().to_string()).filter(|n| !n.is_empty())
        }
    };
    let lines = state
        .grades
        .display_grades(role, student.as_deref(), state.parent_gate());
    console.lines(lines)?;
    Ok(())
}

pub fn show_statistics<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.lines(state.grades.display_statistics())?;
    Ok(())
}
