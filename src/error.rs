// File: ./src/error.rs
// Validation errors surfaced to the user; none of them end the session.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HelperError {
    #[error("Неверная роль: '{0}'. Попробуйте снова.")]
    InvalidRole(String),

    #[error("Неизвестный день недели: '{0}'.")]
    InvalidDay(String),

    #[error("Вы не ввели ни одного предмета.")]
    EmptySubjects,

    #[error("Ошибка: предмет и задание не могут быть пустыми.")]
    EmptyHomework,

    #[error("Subject and task cannot be empty.")]
    EmptyAssignment,

    #[error("Ошибка: предмет и имя ученика не могут быть пустыми.")]
    EmptyGradeFields,

    #[error("Ошибка: Введите число.")]
    NotANumber(String),

    #[error("Неверный номер задания.")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Ошибка: Оценка должна быть в диапазоне от 0 до 5.")]
    GradeOutOfRange(f64),

    #[error("Ошибка: Пожалуйста, введите числовое значение для оценки.")]
    GradeNotANumber(String),

    #[error("Invalid date format. Please enter the date in the format YYYY-MM-DD.")]
    InvalidDate(String),
}

pub type HelperResult<T> = Result<T, HelperError>;
