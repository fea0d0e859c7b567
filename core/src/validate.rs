//! Payload validation shared by the create and update paths.
//!
//! The check is about the types and content of fields that are present; it
//! never requires a field to exist. That keeps it usable for partial updates.

use serde::Serialize;
use serde_json::Value;

use crate::types::{CreateTaskRequest, UpdateTaskRequest};

/// Returns `false` when the payload is not an object, when `title` is
/// present but not a non-blank string, when `description` is present but not
/// a string, or when `completed` is present but not a boolean.
///
/// An explicit `null` counts as present with the wrong type.
pub fn validate_task(payload: &Value) -> bool {
    let Some(fields) = payload.as_object() else {
        return false;
    };
    if let Some(title) = fields.get("title") {
        match title.as_str() {
            Some(title) if !title.trim().is_empty() => {}
            _ => return false,
        }
    }
    if let Some(description) = fields.get("description") {
        if !description.is_string() {
            return false;
        }
    }
    if let Some(completed) = fields.get("completed") {
        if !completed.is_boolean() {
            return false;
        }
    }
    true
}

/// Typed entry point to [`validate_task`].
pub trait Validate: Serialize {
    fn is_valid(&self) -> bool {
        match serde_json::to_value(self) {
            Ok(value) => validate_task(&value),
            Err(_) => false,
        }
    }
}

impl Validate for CreateTaskRequest {}
impl Validate for UpdateTaskRequest {}
