// File: ./src/model/role.rs
// Closed vocabularies typed in by the user: session role and weekday
use crate::error::HelperError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Teacher,
    Student,
    Parent,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Teacher, Role::Student, Role::Parent];

    pub fn display_name(self) -> &'static str {
        match self {
            Role::Teacher => "Учитель",
            Role::Student => "Ученик",
            Role::Parent => "Родитель",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Role {
    type Err = HelperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "учитель" | "teacher" => Ok(Role::Teacher),
            "ученик" | "student" => Ok(Role::Student),
            "родитель" | "parent" => Ok(Role::Parent),
            _ => Err(HelperError::InvalidRole(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchoolDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl SchoolDay {
    pub const ALL: [SchoolDay; 7] = [
        SchoolDay::Monday,
        SchoolDay::Tuesday,
        SchoolDay::Wednesday,
        SchoolDay::Thursday,
        SchoolDay::Friday,
        SchoolDay::Saturday,
        SchoolDay::Sunday,
    ];

    /// Key under which the day is stored in the data file.
    pub fn key(self) -> &'static str {
        match self {
            SchoolDay::Monday => "Понедельник",
            SchoolDay::Tuesday => "Вторник",
            SchoolDay::Wednesday => "Среда",
            SchoolDay::Thursday => "Четверг",
            SchoolDay::Friday => "Пятница",
            SchoolDay::Saturday => "Суббота",
            SchoolDay::Sunday => "Воскресенье",
        }
    }

    fn english(self) -> &'static str {
        match self {
            SchoolDay::Monday => "monday",
            SchoolDay::Tuesday => "tuesday",
            SchoolDay::Wednesday => "wednesday",
            SchoolDay::Thursday => "thursday",
            SchoolDay::Friday => "friday",
            SchoolDay::Saturday => "saturday",
            SchoolDay::Sunday => "sunday",
        }
    }
}

impl fmt::Display for SchoolDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SchoolDay {
    type Err = HelperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        SchoolDay::ALL
            .into_iter()
            .find(|day| day.key().to_lowercase() == needle || day.english() == needle)
            .ok_or_else(|| HelperError::InvalidDay(s.trim().to_string()))
    }
}
