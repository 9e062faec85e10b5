use crate::menu::console::Console;
use crate::menu::handlers;
use crate::menu::state::AppState;
use crate::model::Role;
use anyhow::Result;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddSchedule,
    ViewSchedule,
    AddHomework,
    ViewHomework,
    MarkHomeworkCompleted,
    DeleteHomework,
    CheckDeadlines,
    ViewAssignments,
    AddAssignment,
    RemoveAssignment,
    AddGrade,
    ShowGrades,
    ShowStatistics,
    Exit,
}

pub struct MenuEntry {
    pub key: &'static str,
    pub action: MenuAction,
}

const fn entry(key: &'static str, action: MenuAction) -> MenuEntry {
    MenuEntry { key, action }
}

const TEACHER_MENU: &[MenuEntry] = &[
    entry("1", MenuAction::AddSchedule),
    entry("2", MenuAction::ViewSchedule),
    entry("3", MenuAction::AddHomework),
    entry("4", MenuAction::ViewHomework),
    entry("5", MenuAction::DeleteHomework),
    entry("7", MenuAction::Exit),
    entry("8", MenuAction::AddGrade),
    entry("9", MenuAction::ShowGrades),
    entry("10", MenuAction::ShowStatistics),
    entry("11", MenuAction::AddAssignment),
    entry("12", MenuAction::RemoveAssignment),
    entry("13", MenuAction::ViewAssignments),
];

const STUDENT_MENU: &[MenuEntry] = &[
    entry("2", MenuAction::ViewSchedule),
    entry("3", MenuAction::ViewHomework),
    entry("4", MenuAction::MarkHomeworkCompleted),
    entry("5", MenuAction::CheckDeadlines),
    entry("6", MenuAction::ViewAssignments),
    entry("7", MenuAction::Exit),
    entry("9", MenuAction::ShowGrades),
];

const PARENT_MENU: &[MenuEntry] = &[
    entry("7", MenuAction::Exit),
    entry("9", MenuAction::ShowGrades),
];

pub fn menu_for(role: Role) -> &'static [MenuEntry] {
    match role {
        Role::Teacher => TEACHER_MENU,
        Role::Student => STUDENT_MENU,
        Role::Parent => PARENT_MENU,
    }
}

pub fn lookup(role: Role, choice: &str) -> Option<MenuAction> {
    let choice = choice.trim();
    menu_for(role)
        .iter()
        .find(|e| e.key == choice)
        .map(|e| e.action)
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::AddSchedule => "Добавить расписание",
            MenuAction::ViewSchedule => "Просмотреть расписание",
            MenuAction::AddHomework => "Добавить домашнее задание",
            MenuAction::ViewHomework => "Просмотреть домашние задания",
            MenuAction::MarkHomeworkCompleted => "Отметить домашнее задание как выполненное",
            MenuAction::DeleteHomework => "Удалить домашнее задание",
            MenuAction::CheckDeadlines => "Проверить дедлайны",
            MenuAction::ViewAssignments => "Просмотреть задания",
            MenuAction::AddAssignment => "Добавить задание с дедлайном",
            MenuAction::RemoveAssignment => "Удалить задание с дедлайном",
            MenuAction::AddGrade => "Добавить оценку",
            MenuAction::ShowGrades => "Показать оценки",
            MenuAction::ShowStatistics => "Показать статистику успеваемости",
            MenuAction::Exit => "Выход",
        }
    }

    /// Schedule and homework actions rewrite the data file afterwards,
    /// whether or not their input was valid.
    pub fn persists(self) -> bool {
        matches!(
            self,
            MenuAction::AddSchedule
                | MenuAction::AddHomework
                | MenuAction::MarkHomeworkCompleted
                | MenuAction::DeleteHomework
        )
    }

    pub fn run<R: BufRead, W: Write>(
        self,
        role: Role,
        state: &mut AppState,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        tracing::debug!(action = ?self, role = %role, "running menu action");
        match self {
            MenuAction::AddSchedule => handlers::add_schedule(state, console)?,
            MenuAction::ViewSchedule => handlers::view_schedule(state, console)?,
            MenuAction::AddHomework => handlers::add_homework(state, console)?,
            MenuAction::ViewHomework => handlers::view_homework(state, console)?,
            MenuAction::MarkHomeworkCompleted => handlers::mark_homework_completed(state, console)?,
            MenuAction::DeleteHomework => handlers::delete_homework(state, console)?,
            MenuAction::CheckDeadlines => handlers::check_deadlines(state, console)?,
            MenuAction::ViewAssignments => handlers::view_assignments(state, console)?,
            MenuAction::AddAssignment => handlers::add_assignment(state, console)?,
            MenuAction::RemoveAssignment => handlers::remove_assignment_by_task(state, console)?,
            MenuAction::AddGrade => handlers::add_grade(state, console)?,
            MenuAction::ShowGrades => handlers::show_grades(role, state, console)?,
            MenuAction::ShowStatistics => handlers::show_statistics(state, console)?,
            MenuAction::Exit => {}
        }

        if self.persists()
            && let Err(e) = state.persist()
        {
            tracing::error!(error = %e, "failed to save school data");
            console.error(&format!("Не удалось сохранить данные: {e:#}"))?;
        }
        Ok(())
    }
}
