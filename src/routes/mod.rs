//! Route tables: user CRUD plus operational endpoints.

mod common;
mod users;
pub use common::*;
pub use users::*;
