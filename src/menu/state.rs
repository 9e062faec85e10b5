use crate::assignments::AssignmentList;
use crate::config::{Config, ParentVisibility};
use crate::grades::GradeStore;
use crate::model::{Role, SchoolData};
use crate::storage::{LoadStatus, LocalStorage};
use anyhow::Result;
use chrono::{Local, NaiveDate};

/// Where the menu loop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    AwaitingRole,
    Active(Role),
    Terminated,
}

/// Everything a menu action can read or change.
pub struct AppState {
    pub data: SchoolData,
    pub grades: GradeStore,
    pub assignments: AssignmentList,
    pub config: Config,
    /// Pins "today" for deadline checks; `None` uses the local clock.
    pub fixed_today: Option<NaiveDate>,
}

impl AppState {
    pub fn new(config: Config, data: SchoolData) -> Self {
        Self {
            data,
            grades: GradeStore::new(),
            assignments: AssignmentList::seeded(),
            config,
            fixed_today: None,
        }
    }

    pub fn load(config: Config) -> Result<(Self, LoadStatus)> {
        let (data, status) = LocalStorage::load(&config.data_file)?;
        Ok((Self::new(config, data), status))
    }

    pub fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn parent_gate(&self) -> Option<&str> {
        match self.config.parent_visibility {
            ParentVisibility::RequireSubject => Some(self.config.parent_gate_subject.as_str()),
            ParentVisibility::AnySubject => None,
        }
    }

    pub fn persist(&self) -> Result<()> {
        LocalStorage::save(&self.config.data_file, &self.data)
    }
}
