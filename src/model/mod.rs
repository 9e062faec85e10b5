// File: ./src/model/mod.rs
// Aggregates the split model files
pub mod item;
pub mod parser;
pub mod role;

pub use item::{Assignment, HomeworkItem, SchoolData};
pub use role::{Role, SchoolDay};
