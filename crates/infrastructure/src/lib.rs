//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod console_email_service;
mod in_memory_auth_event_repository;
mod in_memory_task_repository;
mod in_memory_user_repository;
mod mock_dashboard_repository;

pub use console_email_service::ConsoleEmailService;
pub use in_memory_auth_event_repository::InMemoryAuthEventRepository;
pub use in_memory_task_repository::InMemoryTaskRepository;
pub use in_memory_user_repository::InMemoryUserRepository;
pub use mock_dashboard_repository::MockDashboardRepository;
