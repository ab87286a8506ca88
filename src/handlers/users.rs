//! User CRUD handlers: validate input, call the store, map the outcome.

use crate::error::AppError;
use crate::model::{CreateUser, ListQuery, UserPatch};
use crate::response::MessageBody;
use crate::state::AppState;
use crate::store::StoreError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest("invalid id".into()))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUser>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let new = body.into_new_user()?;
    let user = state.store.create(&new).await.map_err(|e| {
        tracing::error!(error = %e, "create user failed");
        AppError::Internal("failed to create user")
    })?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let filter = query.into_filter()?;
    let users = state.store.list(&filter).await.map_err(|e| {
        tracing::error!(error = %e, "list users failed");
        AppError::Internal("failed to list users")
    })?;
    Ok((StatusCode::OK, Json(users)))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(patch): Json<UserPatch>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if patch.is_empty() {
        return Err(AppError::Validation(
            "at least one field (email, name, age) must be provided".into(),
        ));
    }
    let user = state.store.update(id, &patch).await.map_err(|e| match e {
        StoreError::NotFound => AppError::NotFound(id),
        e => {
            tracing::error!(error = %e, "update user failed");
            AppError::Internal("failed to update user")
        }
    })?;
    Ok((StatusCode::OK, Json(user)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.store.delete(id).await.map_err(|e| match e {
        StoreError::NotFound => AppError::NotFound(id),
        e => {
            tracing::error!(error = %e, "delete user failed");
            AppError::Internal("failed to delete user")
        }
    })?;
    Ok((
        StatusCode::OK,
        Json(MessageBody::new("Usuário deletado com sucesso!")),
    ))
}
