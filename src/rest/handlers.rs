//! Request handlers for the HTTP boundary.

use super::AppState;
use super::error::ApiError;
use super::payloads::{
    CreateTaskPayload, CreatedBody, CredentialsPayload, OkBody, TokenBody, UpdateTaskPayload,
};
use crate::identity::{ports::CredentialRepository, services::RegisterUserRequest};
use crate::task::{
    domain::TaskId,
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskSnapshot},
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    routing::{get, post, put},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Assembles the route table served under `/api`.
pub fn routes<CR, TR, C>() -> Router<Arc<AppState<CR, TR, C>>>
where
    CR: CredentialRepository + 'static,
    TR: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/register", post(register::<CR, TR, C>))
        .route("/login", post(login::<CR, TR, C>))
        .route(
            "/tasks",
            get(list_tasks::<CR, TR, C>).post(create_task::<CR, TR, C>),
        )
        .route(
            "/tasks/:id",
            put(update_task::<CR, TR, C>).delete(delete_task::<CR, TR, C>),
        )
}

/// Extracts the bearer credential from the `Authorization` header.
///
/// A missing header, a non-bearer scheme, and a malformed value all fail
/// the same way as an invalid token.
fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(ApiError::Unauthorized)
}

async fn register<CR, TR, C>(
    State(state): State<Arc<AppState<CR, TR, C>>>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<(StatusCode, Json<CreatedBody>), ApiError>
where
    CR: CredentialRepository + 'static,
    TR: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let CredentialsPayload { username, password } = payload;
    let user = state
        .credentials
        .register(RegisterUserRequest::new(username, password))
        .await?;

    info!(id = %user.id(), username = %user.username(), "registered user");

    Ok((
        StatusCode::CREATED,
        Json(CreatedBody {
            id: user.id().into_inner(),
        }),
    ))
}

async fn login<CR, TR, C>(
    State(state): State<Arc<AppState<CR, TR, C>>>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<Json<TokenBody>, ApiError>
where
    CR: CredentialRepository + 'static,
    TR: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let CredentialsPayload { username, password } = payload;
    let user_id = state.credentials.verify(&username, &password).await?;
    let token = state.sessions.issue(user_id)?;

    info!(id = %user_id, "issued session token");

    Ok(Json(TokenBody {
        token: token.into_inner(),
    }))
}

async fn list_tasks<CR, TR, C>(
    State(state): State<Arc<AppState<CR, TR, C>>>,
    headers: HeaderMap,
) -> Result<Json<Vec<TaskSnapshot>>, ApiError>
where
    CR: CredentialRepository + 'static,
    TR: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let token = bearer_token(&headers)?;
    let snapshots = state.tasks.list_tasks(token).await?;
    Ok(Json(snapshots))
}

async fn create_task<CR, TR, C>(
    State(state): State<Arc<AppState<CR, TR, C>>>,
    headers: HeaderMap,
    Json(payload): Json<CreateTaskPayload>,
) -> Result<(StatusCode, Json<CreatedBody>), ApiError>
where
    CR: CredentialRepository + 'static,
    TR: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let token = bearer_token(&headers)?;
    let CreateTaskPayload {
        title,
        description,
        deadline,
    } = payload;

    let mut request = CreateTaskRequest::new(title);
    if let Some(text) = description {
        request = request.with_description(text);
    }
    if let Some(deadline_at) = deadline {
        request = request.with_deadline(deadline_at);
    }

    let task = state.tasks.create_task(token, request).await?;

    info!(id = %task.id(), title = %task.title(), "created task");

    Ok((
        StatusCode::CREATED,
        Json(CreatedBody {
            id: task.id().into_inner(),
        }),
    ))
}

async fn update_task<CR, TR, C>(
    State(state): State<Arc<AppState<CR, TR, C>>>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(payload): Json<UpdateTaskPayload>,
) -> Result<Json<OkBody>, ApiError>
where
    CR: CredentialRepository + 'static,
    TR: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let token = bearer_token(&headers)?;
    let patch = payload.into_patch()?;
    let task = state
        .tasks
        .update_task(token, TaskId::from_uuid(id), &patch)
        .await?;

    info!(id = %task.id(), status = ?task.status(), "updated task");

    Ok(Json(OkBody { ok: true }))
}

async fn delete_task<CR, TR, C>(
    State(state): State<Arc<AppState<CR, TR, C>>>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<OkBody>, ApiError>
where
    CR: CredentialRepository + 'static,
    TR: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let token = bearer_token(&headers)?;
    state.tasks.delete_task(token, TaskId::from_uuid(id)).await?;

    info!(id = %id, "deleted task");

    Ok(Json(OkBody { ok: true }))
}
