pub mod access_management;
pub mod auth;
pub mod dashboard;
pub mod email;
pub mod health;
pub mod layout;
pub mod tasks;
