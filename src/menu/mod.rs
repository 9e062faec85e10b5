// File: ./src/menu/mod.rs
pub mod action;
pub mod console;
pub mod handlers;
pub mod state;

pub use action::{MenuAction, MenuEntry, lookup, menu_for};
pub use console::Console;
pub use state::{AppState, Session};

use crate::config::Config;
use crate::model::Role;
use crate::storage::LoadStatus;
use anyhow::Result;
use std::io::{BufRead, Write};

const ROLE_PROMPT: &str = "Выберите роль (Учитель/Ученик/Родитель): ";

impl Session {
    /// Advances the menu by one prompt.
    pub fn step<R: BufRead, W: Write>(
        self,
        state: &mut AppState,
        console: &mut Console<R, W>,
    ) -> Result<Session> {
        match self {
            Session::Terminated => Ok(Session::Terminated),
            Session::AwaitingRole => {
                let answer = console.prompt(ROLE_PROMPT)?;
                if console.is_exhausted() {
                    return Ok(Session::Terminated);
                }
                match answer.parse::<Role>() {
                    Ok(role) => {
                        tracing::info!(role = %role, "session started");
                        Ok(Session::Active(role))
                    }
                    Err(e) => {
                        console.error(&e.to_string())?;
                        Ok(Session::AwaitingRole)
                    }
                }
            }
            Session::Active(role) => {
                console.line("")?;
                console.header(&format!("Добро пожаловать, {role}!"))?;
                for entry in menu_for(role) {
                    console.line(&format!("{}. {}", entry.key, entry.action.label()))?;
                }

                let choice = console.prompt("Выберите действие: ")?;
                if console.is_exhausted() {
                    return Ok(Session::Terminated);
                }
                match lookup(role, &choice) {
                    Some(MenuAction::Exit) => {
                        console.success("До свидания!")?;
                        Ok(Session::Terminated)
                    }
                    Some(action) => {
                        action.run(role, state, console)?;
                        Ok(Session::Active(role))
                    }
                    None => {
                        console.error("Неверный выбор. Попробуйте снова.")?;
                        Ok(Session::Active(role))
                    }
                }
            }
        }
    }
}

/// Drives the menu until the user exits or input runs out.
pub fn run<R: BufRead, W: Write>(state: &mut AppState, console: &mut Console<R, W>) -> Result<()> {
    let mut session = Session::AwaitingRole;
    while session != Session::Terminated {
        session = session.step(state, console)?;
    }
    tracing::info!("session finished");
    Ok(())
}

/// Loads the data file named by `config` and runs an interactive session on stdio.
pub fn start(config: Config) -> Result<()> {
    let (mut state, status) = AppState::load(config)?;
    let mut console = Console::stdio();
    if status == LoadStatus::Corrupt {
        console.warn("Ошибка чтения данных. Файл поврежден. Начинаем с пустых данных.")?;
    }
    run(&mut state, &mut console)
}
