//! Shared service plumbing for the mock database workspace.

pub mod health;
pub mod middleware;
pub mod time;
pub mod tracing;
