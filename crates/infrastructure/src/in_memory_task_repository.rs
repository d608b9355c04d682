//! In-memory task store for the task manager.

use async_trait::async_trait;
use auditdesk_application::{CreateTaskInput, TaskPatch, TaskRepository};
use auditdesk_core::AppResult;
use auditdesk_domain::{Task, TaskPriority, TaskStatus};
use chrono::{NaiveDate, TimeZone, Utc};
use tokio::sync::RwLock;

/// Task repository backed by a mutex-guarded vector. Ids are sequential and
/// never reused within one process lifetime.
#[derive(Debug)]
pub struct InMemoryTaskRepository {
    state: RwLock<TaskState>,
}

#[derive(Debug)]
struct TaskState {
    tasks: Vec<Task>,
    next_id: u64,
}

fn seed_task(
    id: u64,
    title: &str,
    description: &str,
    status: TaskStatus,
    priority: TaskPriority,
    due: (i32, u32, u32),
    created: (i32, u32, u32, u32, u32),
) -> Task {
    let (year, month, day) = due;
    let (cy, cm, cd, ch, cmin) = created;
    Task {
        id,
        title: title.to_owned(),
        description: description.to_owned(),
        status,
        priority,
        assignee: "admin@democompany.com".to_owned(),
        due_date: NaiveDate::from_ymd_opt(year, month, day),
        created_by: "admin@democompany.com".to_owned(),
        created_at: Utc
            .with_ymd_and_hms(cy, cm, cd, ch, cmin, 0)
            .single()
            .unwrap_or_else(Utc::now),
        updated_at: None,
    }
}

impl InMemoryTaskRepository {
    /// Creates the repository with the demo backlog seeded.
    #[must_use]
    pub fn seeded() -> Self {
        let tasks = vec![
            seed_task(
                1,
                "Complete Q1 Audit Report",
                "Finalize and submit Q1 audit findings report",
                TaskStatus::InProgress,
                TaskPriority::High,
                (2025, 2, 28),
                (2025, 1, 15, 10, 0),
            ),
            seed_task(
                2,
                "Review IT Security Controls",
                "Conduct comprehensive review of IT security measures",
                TaskStatus::ToDo,
                TaskPriority::Medium,
                (2025, 3, 15),
                (2025, 1, 20, 14, 30),
            ),
            seed_task(
                3,
                "Update Risk Register",
                "Update quarterly risk register with new identified risks",
                TaskStatus::Completed,
                TaskPriority::Medium,
                (2025, 1, 31),
                (2025, 1, 10, 9, 0),
            ),
        ];

        Self {
            state: RwLock::new(TaskState { tasks, next_id: 4 }),
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list_tasks(&self) -> AppResult<Vec<Task>> {
        Ok(self.state.read().await.tasks.clone())
    }

    async fn insert_task(&self, input: CreateTaskInput, created_by: &str) -> AppResult<Task> {
        let mut state = self.state.write().await;
        let task = Task {
            id: state.next_id,
            title: input.title,
            description: input.description,
            status: input.status,
            priority: input.priority,
            assignee: input.assignee,
            due_date: input.due_date,
            created_by: created_by.to_owned(),
            created_at: Utc::now(),
            updated_at: None,
        };
        state.next_id += 1;
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: u64, patch: TaskPatch) -> AppResult<Option<Task>> {
        let mut state = self.state.write().await;
        let Some(task) = state.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(assignee) = patch.assignee {
            task.assignee = assignee;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = Some(due_date);
        }
        task.updated_at = Some(Utc::now());

        Ok(Some(task.clone()))
    }

    async fn delete_task(&self, id: u64) -> AppResult<bool> {
        let mut state = self.state.write().await;
        let before = state.tasks.len();
        state.tasks.retain(|task| task.id != id);
        Ok(state.tasks.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use auditdesk_application::{CreateTaskInput, TaskPatch, TaskRepository};
    use auditdesk_domain::{TaskPriority, TaskStatus};

    use super::InMemoryTaskRepository;

    fn input(title: &str) -> CreateTaskInput {
        CreateTaskInput {
            title: title.to_owned(),
            description: "desc".to_owned(),
            status: TaskStatus::ToDo,
            priority: TaskPriority::Low,
            assignee: "mahmut@demo.com".to_owned(),
            due_date: None,
        }
    }

    #[tokio::test]
    async fn seeds_three_tasks() {
        let repository = InMemoryTaskRepository::seeded();
        let tasks = repository.list_tasks().await.unwrap_or_default();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].title, "Complete Q1 Audit Report");
    }

    #[tokio::test]
    async fn ids_are_sequential_and_not_reused() {
        let repository = InMemoryTaskRepository::seeded();

        let first = repository.insert_task(input("a"), "mahmut@demo.com").await;
        assert_eq!(first.map(|task| task.id).ok(), Some(4));

        assert!(matches!(repository.delete_task(4).await, Ok(true)));

        let second = repository.insert_task(input("b"), "mahmut@demo.com").await;
        assert_eq!(second.map(|task| task.id).ok(), Some(5));
    }

    #[tokio::test]
    async fn patch_updates_only_given_fields() {
        let repository = InMemoryTaskRepository::seeded();
        let patch = TaskPatch {
            status: Some(TaskStatus::Completed),
            ..TaskPatch::default()
        };

        let updated = repository.update_task(2, patch).await;
        let Ok(Some(task)) = updated else {
            panic!("task 2 should exist");
        };
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.title, "Review IT Security Controls");
        assert!(task.updated_at.is_some());
    }

    #[tokio::test]
    async fn delete_of_unknown_id_reports_false() {
        let repository = InMemoryTaskRepository::seeded();
        assert!(matches!(repository.delete_task(99).await, Ok(false)));
    }
}
