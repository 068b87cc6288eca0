pub mod dashboard;
pub mod placeholder;
pub mod tasks;
pub mod team;

pub use dashboard::Dashboard;
pub use placeholder::PlaceholderPage;
pub use tasks::TasksPage;
pub use team::Team;
