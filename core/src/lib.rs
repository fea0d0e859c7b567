//! Synchronous client core for the task service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The host supplies a
//! `Transport` that performs the round-trip; `TaskList` drives it and keeps
//! the list state a view renders from.
//!
//! # Design
//! - `TaskClient` is stateless; it holds only the endpoint URLs.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Every failure becomes one `RequestError` whose `Display` is the text
//!   shown to the user.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod http;
pub mod types;
pub mod validate;

pub use client::TaskClient;
pub use config::ClientConfig;
pub use controller::{track_key, Confirm, Outcome, TaskList};
pub use error::{failure_message, ConfigError, RequestError};
pub use format::{display_date, format_date, format_date_in, format_date_str};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use types::{ApiResponse, CreateTaskRequest, Task, UpdateTaskRequest};
pub use validate::{validate_task, Validate};
