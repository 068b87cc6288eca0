pub mod recent_tasks;
pub mod stat_card;
pub mod team_overview;

pub use recent_tasks::RecentTasks;
pub use stat_card::StatCard;
pub use team_overview::TeamOverview;
