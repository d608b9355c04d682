use std::sync::Arc;

use async_trait::async_trait;
use auditdesk_core::{AppError, AppResult};
use auditdesk_domain::{Task, TaskPriority, TaskStatus};
use chrono::NaiveDate;

/// Fields for a new task. The repository assigns id and creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskInput {
    /// Task title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Initial state.
    pub status: TaskStatus,
    /// Urgency.
    pub priority: TaskPriority,
    /// Assignee email.
    pub assignee: String,
    /// Due date.
    pub due_date: Option<NaiveDate>,
}

/// Partial update of one task; absent fields stay unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New state.
    pub status: Option<TaskStatus>,
    /// New urgency.
    pub priority: Option<TaskPriority>,
    /// New assignee.
    pub assignee: Option<String>,
    /// New due date.
    pub due_date: Option<NaiveDate>,
}

/// Repository port for task-manager records.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Lists all tasks.
    async fn list_tasks(&self) -> AppResult<Vec<Task>>;

    /// Inserts a task created by `created_by`, assigning the next id.
    async fn insert_task(&self, input: CreateTaskInput, created_by: &str) -> AppResult<Task>;

    /// Applies a patch and stamps the update time. `None` for unknown ids.
    async fn update_task(&self, id: u64, patch: TaskPatch) -> AppResult<Option<Task>>;

    /// Deletes a task. `false` for unknown ids.
    async fn delete_task(&self, id: u64) -> AppResult<bool>;
}

/// Application service for the task manager.
#[derive(Clone)]
pub struct TaskService {
    repository: Arc<dyn TaskRepository>,
}

impl TaskService {
    /// Creates a task service over a repository.
    #[must_use]
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    /// Lists all tasks.
    pub async fn list_tasks(&self) -> AppResult<Vec<Task>> {
        self.repository.list_tasks().await
    }

    /// Creates a task on behalf of the session user.
    pub async fn create_task(&self, input: CreateTaskInput, created_by: &str) -> AppResult<Task> {
        if input.title.trim().is_empty() {
            return Err(AppError::Validation(
                "task title must not be empty".to_owned(),
            ));
        }

        self.repository.insert_task(input, created_by).await
    }

    /// Applies a partial update to one task.
    pub async fn update_task(&self, id: u64, patch: TaskPatch) -> AppResult<Task> {
        if patch
            .title
            .as_ref()
            .is_some_and(|title| title.trim().is_empty())
        {
            return Err(AppError::Validation(
                "task title must not be empty".to_owned(),
            ));
        }

        self.repository
            .update_task(id, patch)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no task with id {id}")))
    }

    /// Deletes one task.
    pub async fn delete_task(&self, id: u64) -> AppResult<()> {
        if self.repository.delete_task(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("no task with id {id}")))
        }
    }
}
