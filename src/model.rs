//! Request/response types for the user resource.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored user row, returned as-is in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Body for create and update. Both fields are always replaced on update.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
}

/// Acknowledgement body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteAck {
    pub message: &'static str,
}

impl DeleteAck {
    pub fn user_deleted() -> Self {
        DeleteAck {
            message: "user deleted successfully",
        }
    }
}
