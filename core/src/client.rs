//! Stateless HTTP request builder and response parser for the task API.
//!
//! # Design
//! `TaskClient` holds only its endpoint URLs and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.
//!
//! Failures of any kind come back as `RequestError` and are logged once,
//! here, at `warn`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTaskRequest, Task, UpdateTaskRequest};

/// Synchronous, stateless client for the task API.
#[derive(Debug, Clone)]
pub struct TaskClient {
    base_url: String,
    health_url: String,
}

impl TaskClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            health_url: config.health_url.clone(),
        }
    }

    pub fn build_list_tasks(&self) -> HttpRequest {
        self.bodyless(HttpMethod::Get, format!("{}/allTasks", self.base_url))
    }

    pub fn build_create_task(
        &self,
        input: &CreateTaskRequest,
    ) -> Result<HttpRequest, RequestError> {
        self.with_json(HttpMethod::Post, format!("{}/createTask", self.base_url), input)
    }

    pub fn build_update_task(
        &self,
        id: &str,
        input: &UpdateTaskRequest,
    ) -> Result<HttpRequest, RequestError> {
        self.with_json(HttpMethod::Put, format!("{}/updateTask/{id}", self.base_url), input)
    }

    pub fn build_delete_task(&self, id: &str) -> HttpRequest {
        self.bodyless(HttpMethod::Delete, format!("{}/deleteTask/{id}", self.base_url))
    }

    pub fn build_health_check(&self) -> HttpRequest {
        self.bodyless(HttpMethod::Get, self.health_url.clone())
    }

    /// Tasks in the order the server listed them.
    pub fn parse_list_tasks(&self, response: HttpResponse) -> Result<Vec<Task>, RequestError> {
        decode("list tasks", response)
    }

    pub fn parse_create_task(&self, response: HttpResponse) -> Result<Task, RequestError> {
        decode("create task", response)
    }

    /// The full record as stored after the update.
    pub fn parse_update_task(&self, response: HttpResponse) -> Result<Task, RequestError> {
        decode("update task", response)
    }

    /// The deleted record when the server echoes it, `None` on an empty body.
    pub fn parse_delete_task(&self, response: HttpResponse) -> Result<Option<Task>, RequestError> {
        check_status("delete task", &response)?;
        if response.body.trim().is_empty() {
            return Ok(None);
        }
        decode("delete task", response).map(Some)
    }

    pub fn parse_health_check(
        &self,
        response: HttpResponse,
    ) -> Result<serde_json::Value, RequestError> {
        decode("health check", response)
    }

    fn bodyless(&self, method: HttpMethod, url: String) -> HttpRequest {
        tracing::debug!(%method, %url, "built request");
        HttpRequest {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json<T: Serialize>(
        &self,
        method: HttpMethod,
        url: String,
        input: &T,
    ) -> Result<HttpRequest, RequestError> {
        let body = serde_json::to_string(input).map_err(|e| {
            let err = RequestError::Encode(e.to_string());
            tracing::warn!(%method, %url, error = %e, "could not encode request body");
            err
        })?;
        tracing::debug!(%method, %url, "built request");
        Ok(HttpRequest {
            method,
            url,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Reject non-2xx responses.
fn check_status(operation: &str, response: &HttpResponse) -> Result<(), RequestError> {
    if response.is_success() {
        return Ok(());
    }
    let err = RequestError::Status {
        status: response.status,
        status_text: response.status_text.clone(),
    };
    tracing::warn!(
        operation,
        status = response.status,
        body = %response.body,
        message = %err,
        "request failed"
    );
    Err(err)
}

fn decode<T: DeserializeOwned>(operation: &str, response: HttpResponse) -> Result<T, RequestError> {
    check_status(operation, &response)?;
    serde_json::from_str(&response.body).map_err(|e| {
        tracing::warn!(
            operation,
            status = response.status,
            content_type = response.header("content-type").unwrap_or("-"),
            detail = %e,
            "response body did not decode"
        );
        RequestError::Decode {
            status: response.status,
            status_text: response.status_text,
            detail: e.to_string(),
        }
    })
}
