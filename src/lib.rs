pub mod assignments;
pub mod config;
pub mod error;
pub mod grades;
pub mod menu;
pub mod model;
pub mod storage;

pub use assignments::AssignmentList;
pub use config::Config;
pub use error::{HelperError, HelperResult};
pub use grades::GradeStore;
pub use storage::{LoadStatus, LocalStorage};
