use std::collections::HashSet;
use std::rc::Rc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::core::models::{Project, Task, TaskPriority, TaskStatus, User};

const MOCK_DATA_JSON: &str = include_str!("../data/mock_data.json");

thread_local! {
    static MOCK_DATA: Rc<MockData> = Rc::new(MockData::load());
}

// Tasks reference users by id in the fixture file and are resolved on decode
#[derive(Debug, Deserialize)]
struct TaskRecord {
    id: String,
    project_id: String,
    title: String,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    assignee_id: Option<String>,
    reporter_id: String,
    due_date: Option<NaiveDate>,
    #[serde(default)]
    tags: Vec<String>,
    story_points: Option<u32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct MockFile {
    project: Project,
    users: Vec<User>,
    tasks: Vec<TaskRecord>,
}

/// Static stand-in for a backend: one project, its users and their tasks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockData {
    pub project: Option<Project>,
    pub users: Vec<User>,
    pub tasks: Vec<Task>,
}

impl MockData {
    pub fn decode(json: &str) -> Result<Self, String> {
        let file: MockFile = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse mock data: {}", e))?;

        ensure_unique_ids("user", file.users.iter().map(|u| u.id.as_str()))?;
        ensure_unique_ids("task", file.tasks.iter().map(|t| t.id.as_str()))?;

        let users = file.users;
        let tasks = file
            .tasks
            .into_iter()
            .map(|record| resolve_task(record, &users))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            project: Some(file.project),
            users,
            tasks,
        })
    }

    // Bad fixtures leave the UI empty rather than taking the page down
    fn load() -> Self {
        match Self::decode(MOCK_DATA_JSON) {
            Ok(data) => {
                log::debug!(
                    "Loaded mock data: {} users, {} tasks",
                    data.users.len(),
                    data.tasks.len()
                );
                data
            }
            Err(e) => {
                log::error!("{}", e);
                Self::default()
            }
        }
    }
}

fn ensure_unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), String> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(format!("Duplicate {} id in mock data: {}", kind, id));
        }
    }
    Ok(())
}

fn lookup_user(users: &[User], id: &str, task_id: &str) -> Result<User, String> {
    users
        .iter()
        .find(|u| u.id == id)
        .cloned()
        .ok_or_else(|| format!("Task {} references unknown user {}", task_id, id))
}

fn resolve_task(record: TaskRecord, users: &[User]) -> Result<Task, String> {
    let assignee = match record.assignee_id.as_deref() {
        Some(id) => Some(lookup_user(users, id, &record.id)?),
        None => None,
    };
    let reporter = lookup_user(users, &record.reporter_id, &record.id)?;

    Ok(Task {
        id: record.id,
        project_id: record.project_id,
        title: record.title,
        description: record.description,
        status: record.status,
        priority: record.priority,
        assignee,
        reporter,
        due_date: record.due_date,
        tags: record.tags,
        story_points: record.story_points,
        created_at: record.created_at,
        updated_at: record.updated_at,
    })
}

pub fn mock_data() -> Rc<MockData> {
    MOCK_DATA.with(Rc::clone)
}

pub fn mock_users() -> Vec<User> {
    mock_data().users.clone()
}

pub fn mock_tasks() -> Vec<Task> {
    mock_data().tasks.clone()
}

pub fn mock_project() -> Option<Project> {
    mock_data().project.clone()
}

/// The simulated logged-in user: the configured id if present, else the first user.
pub fn current_user(users: &[User], user_id: &str) -> Option<User> {
    users
        .iter()
        .find(|u| u.id == user_id)
        .or_else(|| users.first())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_fixtures_decode() {
        let data = MockData::decode(MOCK_DATA_JSON).expect("fixtures should decode");
        assert_eq!(data.users.len(), 5);
        assert_eq!(data.tasks.len(), 8);
        assert_eq!(data.project.map(|p| p.name), Some("Plataforma de Gestión".to_string()));
    }

    #[test]
    fn fixture_ids_are_unique() {
        let data = mock_data();
        let user_ids: HashSet<_> = data.users.iter().map(|u| &u.id).collect();
        let task_ids: HashSet<_> = data.tasks.iter().map(|t| &t.id).collect();
        assert_eq!(user_ids.len(), data.users.len());
        assert_eq!(task_ids.len(), data.tasks.len());
    }

    #[test]
    fn counts_are_stable_across_reads() {
        let first = (mock_users().len(), mock_tasks().len());
        let second = (mock_users().len(), mock_tasks().len());
        assert_eq!(first, (5, 8));
        assert_eq!(first, second);
    }

    #[test]
    fn assignees_are_resolved_to_full_users() {
        let tasks = mock_tasks();
        let task = tasks.iter().find(|t| t.id == "1").unwrap();
        let assignee = task.assignee.as_ref().unwrap();
        assert_eq!(assignee.name, "María López");
        assert_eq!(task.reporter.id, "1");

        let unassigned = tasks.iter().find(|t| t.id == "3").unwrap();
        assert!(unassigned.assignee.is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{
            "project": {"id": "p", "name": "P", "description": "", "status": "active",
                        "start_date": "2024-01-01", "created_at": "2024-01-01T00:00:00Z"},
            "users": [
                {"id": "1", "name": "A", "email": "a@x", "role": "r", "avatar": ""},
                {"id": "1", "name": "B", "email": "b@x", "role": "r", "avatar": ""}
            ],
            "tasks": []
        }"#;
        let err = MockData::decode(json).unwrap_err();
        assert!(err.contains("Duplicate user id"));
    }

    #[test]
    fn unknown_user_reference_is_rejected() {
        let json = r#"{
            "project": {"id": "p", "name": "P", "description": "", "status": "active",
                        "start_date": "2024-01-01", "created_at": "2024-01-01T00:00:00Z"},
            "users": [{"id": "1", "name": "A", "email": "a@x", "role": "r", "avatar": ""}],
            "tasks": [{
                "id": "t1", "project_id": "p", "title": "T", "description": "",
                "status": "todo", "priority": "low", "assignee_id": "9", "reporter_id": "1",
                "due_date": null, "story_points": null,
                "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-01T00:00:00Z"
            }]
        }"#;
        let err = MockData::decode(json).unwrap_err();
        assert!(err.contains("unknown user 9"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(MockData::decode("{ not json").unwrap_err().starts_with("Failed to parse"));
    }

    #[test]
    fn current_user_defaults_to_first() {
        let users = mock_users();
        assert_eq!(current_user(&users, "1").map(|u| u.id), Some("1".to_string()));
        assert_eq!(current_user(&users, "3").map(|u| u.id), Some("3".to_string()));
        assert_eq!(current_user(&users, "missing").map(|u| u.id), Some("1".to_string()));
        assert!(current_user(&[], "1").is_none());
    }
}
