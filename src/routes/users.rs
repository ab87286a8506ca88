//! User CRUD routes. Handlers receive the raw id segment and parse it
//! themselves so a bad id answers with the contract's error body.

use crate::handlers::{create_user, delete_user, list_users, update_user};
use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/usuarios", get(list_users).post(create_user))
        .route("/usuarios/:id", put(update_user).delete(delete_user))
        .with_state(state)
}
