use chrono::NaiveDate;

use crate::core::models::{Task, TaskStatus, User};

/// Number of tasks whose assignee is `user_id`.
pub fn assigned_task_count(tasks: &[Task], user_id: &str) -> usize {
    tasks.iter().filter(|t| t.is_assigned_to(user_id)).count()
}

pub fn count_by_status(tasks: &[Task], status: TaskStatus) -> usize {
    tasks.iter().filter(|t| t.status == status).count()
}

pub fn tasks_with_status(tasks: &[Task], status: TaskStatus) -> Vec<Task> {
    tasks.iter().filter(|t| t.status == status).cloned().collect()
}

pub fn find_user<'a>(users: &'a [User], user_id: &str) -> Option<&'a User> {
    users.iter().find(|u| u.id == user_id)
}

/// The task's assignee as listed in `users`, falling back to the copy embedded in the task.
pub fn resolve_assignee(task: &Task, users: &[User]) -> Option<User> {
    let embedded = task.assignee.as_ref()?;
    Some(find_user(users, &embedded.id).unwrap_or(embedded).clone())
}

/// Most recently updated tasks first, at most `limit` of them.
pub fn recent_tasks(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    sorted.truncate(limit);
    sorted
}

/// Case-insensitive match on title, description or any tag. Blank queries match everything.
pub fn filter_tasks(tasks: &[Task], query: &str) -> Vec<Task> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tasks.to_vec();
    }
    tasks
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
                || t.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
    /// Whole percent of tasks done, 0 when there are no tasks.
    pub completion_rate: u8,
}

impl DashboardStats {
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        let total = tasks.len();
        let completed = count_by_status(tasks, TaskStatus::Done);
        let completion_rate = if total == 0 {
            0
        } else {
            ((completed * 100) / total) as u8
        };

        Self {
            total,
            in_progress: count_by_status(tasks, TaskStatus::InProgress),
            completed,
            overdue: tasks.iter().filter(|t| t.is_overdue(today)).count(),
            completion_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::mock_data::{mock_tasks, mock_users};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn assigned_count_matches_assignee_ids() {
        let tasks = mock_tasks();
        for user in mock_users() {
            let expected = tasks
                .iter()
                .filter(|t| t.assignee.as_ref().map(|a| a.id.as_str()) == Some(user.id.as_str()))
                .count();
            assert_eq!(assigned_task_count(&tasks, &user.id), expected);
        }
        assert_eq!(assigned_task_count(&tasks, "1"), 0);
        assert_eq!(assigned_task_count(&tasks, "2"), 2);
        assert_eq!(assigned_task_count(&tasks, "3"), 2);
        assert_eq!(assigned_task_count(&tasks, "nobody"), 0);
    }

    #[test]
    fn status_counts_cover_every_task() {
        let tasks = mock_tasks();
        let sum: usize = TaskStatus::all()
            .into_iter()
            .map(|s| count_by_status(&tasks, s))
            .sum();
        assert_eq!(sum, tasks.len());
        assert_eq!(count_by_status(&tasks, TaskStatus::Todo), 3);
        assert_eq!(tasks_with_status(&tasks, TaskStatus::Review).len(), 1);
    }

    #[test]
    fn dashboard_stats_for_fixtures() {
        let stats = DashboardStats::compute(&mock_tasks(), day(2024, 2, 12));
        assert_eq!(
            stats,
            DashboardStats {
                total: 8,
                in_progress: 2,
                completed: 2,
                overdue: 2,
                completion_rate: 25,
            }
        );
    }

    #[test]
    fn done_tasks_are_never_overdue() {
        let stats = DashboardStats::compute(&mock_tasks(), day(2030, 1, 1));
        // every task with a due date except the two done ones
        assert_eq!(stats.overdue, 5);
    }

    #[test]
    fn empty_list_has_zero_completion() {
        assert_eq!(DashboardStats::compute(&[], day(2024, 1, 1)), DashboardStats::default());
    }

    #[test]
    fn recent_tasks_newest_first_and_limited() {
        let recent = recent_tasks(&mock_tasks(), 3);
        let ids: Vec<_> = recent.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["6", "2", "4"]);
        assert_eq!(recent_tasks(&mock_tasks(), 50).len(), 8);
    }

    #[test]
    fn filter_matches_title_description_and_tags() {
        let tasks = mock_tasks();
        assert_eq!(filter_tasks(&tasks, "   ").len(), tasks.len());

        let by_title: Vec<_> = filter_tasks(&tasks, "DASHBOARD").into_iter().map(|t| t.id).collect();
        assert_eq!(by_title, vec!["2"]);

        let by_tag: Vec<_> = filter_tasks(&tasks, "backend").into_iter().map(|t| t.id).collect();
        assert_eq!(by_tag, vec!["1", "4", "6"]);

        assert!(filter_tasks(&tasks, "no existe").is_empty());
    }

    #[test]
    fn assignee_prefers_the_users_list_entry() {
        let tasks = mock_tasks();
        let mut users = mock_users();
        let task = tasks.iter().find(|t| t.id == "2").unwrap();

        assert_eq!(resolve_assignee(task, &users).map(|u| u.name), Some("David Martín".to_string()));

        let david = users.iter_mut().find(|u| u.id == "4").unwrap();
        david.role = "Design Lead".to_string();
        assert_eq!(resolve_assignee(task, &users).map(|u| u.role), Some("Design Lead".to_string()));
    }

    #[test]
    fn assignee_falls_back_to_embedded_copy() {
        let tasks = mock_tasks();
        let task = tasks.iter().find(|t| t.id == "5").unwrap();
        assert_eq!(resolve_assignee(task, &[]).map(|u| u.id), Some("2".to_string()));

        let unassigned = tasks.iter().find(|t| t.id == "7").unwrap();
        assert!(resolve_assignee(unassigned, &mock_users()).is_none());
    }

    #[test]
    fn find_user_by_id() {
        let users = mock_users();
        assert_eq!(find_user(&users, "4").map(|u| u.name.as_str()), Some("David Martín"));
        assert!(find_user(&users, "42").is_none());
    }
}
