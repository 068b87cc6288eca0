use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::User;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "Por hacer",
            TaskStatus::InProgress => "En progreso",
            TaskStatus::Review => "En revisión",
            TaskStatus::Done => "Completado",
        }
    }

    /// CSS modifier used by badges and column headers.
    pub fn css_class(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "status-todo",
            TaskStatus::InProgress => "status-in-progress",
            TaskStatus::Review => "status-review",
            TaskStatus::Done => "status-done",
        }
    }

    pub fn all() -> Vec<TaskStatus> {
        vec![
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::Review,
            TaskStatus::Done,
        ]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Baja",
            TaskPriority::Medium => "Media",
            TaskPriority::High => "Alta",
            TaskPriority::Urgent => "Urgente",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TaskPriority::Low => "priority-low",
            TaskPriority::Medium => "priority-medium",
            TaskPriority::High => "priority-high",
            TaskPriority::Urgent => "priority-urgent",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default)]
    pub assignee: Option<User>,
    pub reporter: User,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub story_points: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn is_assigned_to(&self, user_id: &str) -> bool {
        self.assignee.as_ref().is_some_and(|u| u.id == user_id)
    }

    /// A task is overdue once its due date has passed and it is not done yet.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != TaskStatus::Done && self.due_date.is_some_and(|due| due < today)
    }
}
