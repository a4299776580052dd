pub mod task;

pub use task::{SAVE_DELIMITER, Task, TaskKind};
