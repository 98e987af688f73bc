//! Application services for task orchestration.

mod tasks;

pub use tasks::{TaskService, TaskServiceError, TaskServiceResult};
