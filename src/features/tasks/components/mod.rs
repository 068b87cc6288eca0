pub mod board;
pub mod column;
pub mod task_card;

pub use board::TaskBoard;
pub use column::TaskColumn;
pub use task_card::TaskCard;
