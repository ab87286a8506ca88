//! usuarios-service: HTTP CRUD for the user resource, backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServiceConfig;
pub use error::AppError;
pub use model::{CreateUser, ListQuery, NewUser, User, UserFilter, UserPatch};
pub use response::MessageBody;
pub use routes::{common_routes_with_ready, user_routes};
pub use state::AppState;
pub use store::{PgUserStore, StoreError, UserStore};
