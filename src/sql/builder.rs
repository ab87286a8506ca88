//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the users table.

use super::params::BindValue;
use crate::model::{NewUser, UserFilter, UserPatch};

/// Column list returned by every statement, in record order.
const COLUMNS: &str = "id, email, name, age";

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    /// Stores the value and returns its 1-based placeholder number.
    fn push_param(&mut self, v: BindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// INSERT of a validated user, RETURNING the stored row with its generated id.
pub fn insert_user(new: &NewUser) -> QueryBuf {
    let mut q = QueryBuf::new();
    let email = q.push_param(BindValue::Text(new.email.clone()));
    let name = q.push_param(BindValue::Text(new.name.clone()));
    let age = q.push_param(BindValue::Int(new.age));
    q.sql = format!(
        "INSERT INTO users (email, name, age) VALUES (${}, ${}, ${}) RETURNING {}",
        email, name, age, COLUMNS
    );
    q
}

/// SELECT with equality filters for the supplied columns only, ORDER BY pk.
pub fn select_users(filter: &UserFilter) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::new();
    if let Some(name) = &filter.name {
        let n = q.push_param(BindValue::Text(name.clone()));
        where_parts.push(format!("name = ${}", n));
    }
    if let Some(email) = &filter.email {
        let n = q.push_param(BindValue::Text(email.clone()));
        where_parts.push(format!("email = ${}", n));
    }
    if let Some(age) = filter.age {
        let n = q.push_param(BindValue::Int(age));
        where_parts.push(format!("age = ${}", n));
    }
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    q.sql = format!("SELECT {} FROM users{} ORDER BY id", COLUMNS, where_clause);
    q
}

/// UPDATE by id, SET only the provided patch fields, RETURNING the row.
/// Caller must ensure at least one field is set.
pub fn update_user(id: i64, patch: &UserPatch) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut set_parts = Vec::new();
    if let Some(email) = &patch.email {
        let n = q.push_param(BindValue::Text(email.clone()));
        set_parts.push(format!("email = ${}", n));
    }
    if let Some(name) = &patch.name {
        let n = q.push_param(BindValue::Text(name.clone()));
        set_parts.push(format!("name = ${}", n));
    }
    if let Some(age) = patch.age {
        let n = q.push_param(BindValue::Int(age));
        set_parts.push(format!("age = ${}", n));
    }
    let id_param = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "UPDATE users SET {} WHERE id = ${} RETURNING {}",
        set_parts.join(", "),
        id_param,
        COLUMNS
    );
    q
}

/// DELETE by id, RETURNING the removed row so absence is observable.
pub fn delete_user(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let id_param = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "DELETE FROM users WHERE id = ${} RETURNING {}",
        id_param, COLUMNS
    );
    q
}
