pub mod enums;
pub mod task;

pub use enums::UiMode;
pub use task::{Priority, TodoItem};
