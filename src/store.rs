//! User persistence: the trait seam and its PostgreSQL implementation.

use crate::model::{NewUser, User, UserFilter, UserPatch};
use crate::sql::{self, QueryBuf};
use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no matching row")]
    NotFound,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Persistence operations for users. Implemented by [`PgUserStore`]; test
/// code substitutes an in-memory double.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, new: &NewUser) -> Result<User, StoreError>;
    async fn list(&self, filter: &UserFilter) -> Result<Vec<User>, StoreError>;
    async fn update(&self, id: i64, patch: &UserPatch) -> Result<User, StoreError>;
    async fn delete(&self, id: i64) -> Result<User, StoreError>;
    /// Connectivity probe for the readiness endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        PgUserStore { pool }
    }

    async fn fetch_optional(&self, q: &QueryBuf) -> Result<Option<User>, StoreError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, User>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_optional(&self.pool).await?)
    }

    async fn fetch_all(&self, q: &QueryBuf) -> Result<Vec<User>, StoreError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, User>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_all(&self.pool).await?)
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, new: &NewUser) -> Result<User, StoreError> {
        let q = sql::insert_user(new);
        self.fetch_optional(&q).await?.ok_or(StoreError::NotFound)
    }

    async fn list(&self, filter: &UserFilter) -> Result<Vec<User>, StoreError> {
        let q = sql::select_users(filter);
        self.fetch_all(&q).await
    }

    async fn update(&self, id: i64, patch: &UserPatch) -> Result<User, StoreError> {
        let q = sql::update_user(id, patch);
        self.fetch_optional(&q).await?.ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<User, StoreError> {
        let q = sql::delete_user(id);
        self.fetch_optional(&q).await?.ok_or(StoreError::NotFound)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
