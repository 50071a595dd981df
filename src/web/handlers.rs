//! Request handlers, one per route.
//!
//! Each handler decodes its inputs, invokes at most one board operation,
//! and renders one template. No handler holds state across requests.

use super::error::HandlerError;
use super::templates::{self, TemplateEngine};
use crate::task::domain::{DoneFlag, TaskId};
use crate::task::ports::TaskRepository;
use crate::task::services::TaskBoardService;
use axum::extract::{Form, Path, State};
use axum::response::Html;
use minijinja::context;
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

/// Shared application dependencies injected into every handler.
///
/// Constructed once at startup and cloned per request; both fields are
/// read-only after construction.
pub struct AppState<R>
where
    R: TaskRepository,
{
    /// Board service executing store operations.
    pub board: TaskBoardService<R>,
    /// Compiled template set.
    pub templates: Arc<TemplateEngine>,
}

impl<R> Clone for AppState<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            board: self.board.clone(),
            templates: Arc::clone(&self.templates),
        }
    }
}

/// Form payload for creating a task.
#[derive(Debug, Deserialize)]
pub struct NewTaskForm {
    /// Description typed into the add-task form.
    pub task: String,
}

/// Form payload for updating a task.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskForm {
    /// Replacement description.
    pub task: String,
    /// Raw completion value; absent when the checkbox is unticked.
    pub done: Option<String>,
}

/// `GET /` — renders the home page. No store call.
pub async fn home<R>(State(state): State<AppState<R>>) -> Result<Html<String>, HandlerError>
where
    R: TaskRepository,
{
    Ok(Html(state.templates.render(templates::HOME, context! {})?))
}

/// `GET /tasks` — renders the task-list fragment.
pub async fn list_tasks<R>(State(state): State<AppState<R>>) -> Result<Html<String>, HandlerError>
where
    R: TaskRepository,
{
    render_task_list(&state).await
}

/// `GET /getnewtaskform` — renders the empty add-task form. No store call.
pub async fn new_task_form<R>(
    State(state): State<AppState<R>>,
) -> Result<Html<String>, HandlerError>
where
    R: TaskRepository,
{
    Ok(Html(
        state.templates.render(templates::NEW_TASK_FORM, context! {})?,
    ))
}

/// `POST /tasks` — creates a task, then re-renders the list fragment.
pub async fn create_task<R>(
    State(state): State<AppState<R>>,
    Form(form): Form<NewTaskForm>,
) -> Result<Html<String>, HandlerError>
where
    R: TaskRepository,
{
    state.board.create_task(&form.task).await?;
    render_task_list(&state).await
}

/// `GET /gettaskupdateform/{id}` — renders the edit form pre-filled from
/// the stored task, or a server error when the identifier is unknown.
pub async fn edit_task_form<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i32>,
) -> Result<Html<String>, HandlerError>
where
    R: TaskRepository,
{
    let task = state.board.task_for_edit(TaskId::new(id)).await?;
    Ok(Html(
        state
            .templates
            .render(templates::EDIT_TASK_FORM, context! { task })?,
    ))
}

/// `PUT|POST /tasks/{id}` — updates a task, then re-renders the list
/// fragment.
pub async fn update_task<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i32>,
    Form(form): Form<UpdateTaskForm>,
) -> Result<Html<String>, HandlerError>
where
    R: TaskRepository,
{
    let done = DoneFlag::parse(form.done.as_deref());
    state
        .board
        .update_task(TaskId::new(id), &form.task, done.as_bool())
        .await?;
    render_task_list(&state).await
}

/// `DELETE /tasks/{id}` — deletes a task, then re-renders the list
/// fragment. Deleting an unknown identifier is not an error.
pub async fn delete_task<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i32>,
) -> Result<Html<String>, HandlerError>
where
    R: TaskRepository,
{
    state.board.delete_task(TaskId::new(id)).await?;
    render_task_list(&state).await
}

/// Renders the list fragment from current store state.
///
/// A failed listing degrades to an empty list so the fragment still
/// renders; only the render itself can fail the response.
async fn render_task_list<R>(state: &AppState<R>) -> Result<Html<String>, HandlerError>
where
    R: TaskRepository,
{
    let tasks = match state.board.list_tasks().await {
        Ok(tasks) => tasks,
        Err(error) => {
            warn!(error = %error, "listing tasks failed; rendering an empty list");
            Vec::new()
        }
    };
    Ok(Html(
        state.templates.render(templates::TASK_LIST, context! { tasks })?,
    ))
}
