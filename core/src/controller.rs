//! In-memory task list driven by server responses.
//!
//! # Design
//! `TaskList` is the state behind the list view: the tasks, a loading flag,
//! the last error message and the creation draft. It never changes a task on
//! its own; every mutation waits for the server's answer and adopts the
//! returned record verbatim. Ids are never synthesized, so every held task
//! carries the id the server gave it.
//!
//! Each operation comes in two halves, after the client's build/parse split:
//! `begin_*` updates the flags and hands back the `HttpRequest`, and
//! `complete_*` takes whatever the round-trip produced and reconciles the
//! list. Between the two, `is_loading()` is `true`, and a host that does its
//! own I/O (async, event loop) keeps rendering from `&self` meanwhile. The
//! blocking `load`/`create`/`toggle_complete`/`delete` wrappers need a
//! `Transport` and run both halves back to back. Overlapping operations share
//! `loading`/`last_error`, last write wins.

use crate::client::TaskClient;
use crate::error::RequestError;
use crate::http::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::types::{CreateTaskRequest, Task, UpdateTaskRequest};
use crate::validate::Validate;

/// Set when the draft fails validation; no request is sent.
pub const MISSING_FIELDS_MESSAGE: &str = "Por favor, completa todos los campos requeridos";

/// Question put to the user before a delete is issued.
pub const DELETE_CONFIRMATION_PROMPT: &str = "¿Estás seguro de que quieres eliminar esta tarea?";

/// Gate in front of destructive operations.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// What an operation did to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server confirmed and the local state now reflects it.
    Applied,
    /// Nothing was sent: invalid draft, task without id, or declined
    /// confirmation.
    Skipped,
    /// The request failed; `last_error` holds the message.
    Failed,
}

/// Rendering identity for a row: the id when there is one, else the position.
pub fn track_key(index: usize, task: &Task) -> String {
    match &task.id {
        Some(id) => id.clone(),
        None => index.to_string(),
    }
}

pub struct TaskList<T = ()> {
    client: TaskClient,
    transport: T,
    tasks: Vec<Task>,
    loading: bool,
    last_error: String,
    draft: CreateTaskRequest,
}

impl<T> TaskList<T> {
    pub fn new(client: TaskClient, transport: T) -> Self {
        Self {
            client,
            transport,
            tasks: Vec::new(),
            loading: false,
            last_error: String::new(),
            draft: CreateTaskRequest::empty(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Empty when the last operation did not fail.
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    pub fn draft(&self) -> &CreateTaskRequest {
        &self.draft
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_draft_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_draft_completed(&mut self, completed: bool) {
        self.draft.completed = Some(completed);
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Start a load: clears the error, raises `loading`, returns the request
    /// to send. Finish with [`TaskList::complete_load`].
    pub fn begin_load(&mut self) -> HttpRequest {
        self.begin(true);
        self.client.build_list_tasks()
    }

    /// Replace the list with the server's, in the server's order.
    pub fn complete_load(&mut self, result: Result<HttpResponse, TransportError>) -> Outcome {
        let result = result
            .map_err(RequestError::from)
            .and_then(|response| self.client.parse_list_tasks(response));
        match result {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "loaded tasks");
                self.tasks = tasks;
                self.finish(Ok(()))
            }
            Err(err) => self.finish(Err(err)),
        }
    }

    /// Start submitting the draft. `Err` means nothing is to be sent: the
    /// draft failed validation (`Skipped`) or could not be encoded
    /// (`Failed`); `last_error` says which.
    pub fn begin_create(&mut self) -> Result<HttpRequest, Outcome> {
        if !self.draft.is_valid() {
            tracing::debug!("draft failed validation");
            self.last_error = MISSING_FIELDS_MESSAGE.to_string();
            return Err(Outcome::Skipped);
        }
        self.begin(true);
        self.client
            .build_create_task(&self.draft)
            .map_err(|err| self.finish(Err(err)))
    }

    /// On success the new task goes to the top of the list and the draft is
    /// reset to the empty template.
    pub fn complete_create(&mut self, result: Result<HttpResponse, TransportError>) -> Outcome {
        let result = result
            .map_err(RequestError::from)
            .and_then(|response| self.client.parse_create_task(response));
        match result {
            Ok(task) => {
                tracing::info!(id = ?task.id, title = %task.title, "created task");
                self.tasks.insert(0, task);
                self.draft = CreateTaskRequest::empty();
                self.finish(Ok(()))
            }
            Err(err) => self.finish(Err(err)),
        }
    }

    /// Start flipping `completed` on the server. `Err(Skipped)` for a task
    /// without an id. Unlike load and create, a previous error message is
    /// left in place until something overwrites it.
    pub fn begin_toggle(&mut self, task: &Task) -> Result<HttpRequest, Outcome> {
        let Some(id) = task.id.as_deref() else {
            return Err(Outcome::Skipped);
        };
        self.begin(false);
        let update = UpdateTaskRequest {
            completed: Some(!task.completed),
            ..Default::default()
        };
        self.client
            .build_update_task(id, &update)
            .map_err(|err| self.finish(Err(err)))
    }

    /// Swap the entry with `id` for the server's record. The local entry is
    /// untouched until this point.
    pub fn complete_toggle(
        &mut self,
        id: &str,
        result: Result<HttpResponse, TransportError>,
    ) -> Outcome {
        let result = result
            .map_err(RequestError::from)
            .and_then(|response| self.client.parse_update_task(response));
        match result {
            Ok(updated) => {
                tracing::info!(id, completed = updated.completed, "toggled task");
                if let Some(slot) = self.tasks.iter_mut().find(|t| t.id.as_deref() == Some(id)) {
                    *slot = updated;
                }
                self.finish(Ok(()))
            }
            Err(err) => self.finish(Err(err)),
        }
    }

    /// Ask `confirm` first; `Err(Skipped)` when it declines, and nothing
    /// changes.
    pub fn begin_delete<C: Confirm + ?Sized>(
        &mut self,
        id: &str,
        confirm: &mut C,
    ) -> Result<HttpRequest, Outcome> {
        if !confirm.confirm(DELETE_CONFIRMATION_PROMPT) {
            tracing::debug!(id, "delete declined");
            return Err(Outcome::Skipped);
        }
        self.begin(true);
        Ok(self.client.build_delete_task(id))
    }

    /// The entry leaves the list only once the server confirms.
    pub fn complete_delete(
        &mut self,
        id: &str,
        result: Result<HttpResponse, TransportError>,
    ) -> Outcome {
        let result = result
            .map_err(RequestError::from)
            .and_then(|response| self.client.parse_delete_task(response));
        match result {
            Ok(_) => {
                self.tasks.retain(|t| t.id.as_deref() != Some(id));
                tracing::info!(id, "deleted task");
                self.finish(Ok(()))
            }
            Err(err) => self.finish(Err(err)),
        }
    }

    fn begin(&mut self, clear_error: bool) {
        self.loading = true;
        if clear_error {
            self.last_error.clear();
        }
    }

    fn finish(&mut self, result: Result<(), RequestError>) -> Outcome {
        self.loading = false;
        match result {
            Ok(()) => Outcome::Applied,
            Err(err) => {
                self.last_error = err.message();
                Outcome::Failed
            }
        }
    }
}

/// Blocking forms: each runs `begin_*`, the round-trip and `complete_*`.
impl<T: Transport> TaskList<T> {
    pub fn load(&mut self) -> Outcome {
        let request = self.begin_load();
        let result = self.transport.execute(request);
        self.complete_load(result)
    }

    pub fn create(&mut self) -> Outcome {
        match self.begin_create() {
            Ok(request) => {
                let result = self.transport.execute(request);
                self.complete_create(result)
            }
            Err(outcome) => outcome,
        }
    }

    pub fn toggle_complete(&mut self, task: &Task) -> Outcome {
        let Some(id) = task.id.as_deref() else {
            return Outcome::Skipped;
        };
        match self.begin_toggle(task) {
            Ok(request) => {
                let result = self.transport.execute(request);
                self.complete_toggle(id, result)
            }
            Err(outcome) => outcome,
        }
    }

    pub fn delete<C: Confirm + ?Sized>(&mut self, id: &str, confirm: &mut C) -> Outcome {
        match self.begin_delete(id, confirm) {
            Ok(request) => {
                let result = self.transport.execute(request);
                self.complete_delete(id, result)
            }
            Err(outcome) => outcome,
        }
    }

    /// Server health payload, for diagnostics. Leaves the list state alone.
    pub fn check_health(&mut self) -> Result<serde_json::Value, RequestError> {
        let response = self.transport.execute(self.client.build_health_check())?;
        self.client.parse_health_check(response)
    }
}
