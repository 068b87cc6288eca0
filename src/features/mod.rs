pub mod dashboard;
pub mod tasks;
