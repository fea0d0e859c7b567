//! Domain DTOs for the task API.
//!
//! # Design
//! Field names on the wire follow the remote service (`_id`, `createdAt`,
//! `updatedAt`); Rust-side names are snake_case. The mock-server crate
//! defines its own copies of these shapes; integration tests catch any
//! schema drift between the two crates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted task as returned by the API.
///
/// `id` is assigned by the server and never synthesized locally. The
/// timestamps are server-owned; the client only displays them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request payload for creating a new task. When `completed` is omitted the
/// server picks its default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl CreateTaskRequest {
    /// The blank template the creation form starts from and resets to.
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            completed: Some(false),
        }
    }
}

impl Default for CreateTaskRequest {
    fn default() -> Self {
        Self::empty()
    }
}

/// Request payload for updating an existing task. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Generic response envelope the service once advertised.
///
/// `TaskClient` does not unwrap this: every route currently answers with a
/// bare `Task` or `Vec<Task>`. Kept so callers that do see the envelope can
/// decode it, and so a mismatch is visible rather than silently assumed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
