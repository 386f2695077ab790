//! CRUD execution against PostgreSQL. One statement per operation; the pool
//! checks a connection out per call and returns it on every exit path.

use crate::error::AppError;
use crate::model::{User, UserInput};
use sqlx::PgPool;

pub struct UserService;

impl UserService {
    /// Insert one row; the database assigns the id. Returns the stored row.
    /// A duplicate email surfaces as a conflict from the unique constraint.
    pub async fn create(pool: &PgPool, input: &UserInput) -> Result<User, AppError> {
        tracing::debug!(name = %input.name, email = %input.email, "insert user");
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id, name, email",
        )
        .bind(&input.name)
        .bind(&input.email)
        .fetch_one(pool)
        .await
        .map_err(AppError::from_db)?;
        Ok(user)
    }

    /// All rows in storage order, fully materialized.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, AppError> {
        tracing::debug!("select all users");
        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users")
            .fetch_all(pool)
            .await?;
        Ok(users)
    }

    /// Fetch one row by primary key, or None.
    pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, AppError> {
        tracing::debug!(id, "select user");
        let user = sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Overwrite name and email unconditionally. Returns the refreshed row,
    /// or None when no row matches the id.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        input: &UserInput,
    ) -> Result<Option<User>, AppError> {
        tracing::debug!(id, name = %input.name, email = %input.email, "update user");
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET name = $2, email = $3 WHERE id = $1 RETURNING id, name, email",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.email)
        .fetch_optional(pool)
        .await
        .map_err(AppError::from_db)?;
        Ok(user)
    }

    /// Remove one row by primary key. Returns whether a row was deleted.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        tracing::debug!(id, "delete user");
        let deleted = sqlx::query("DELETE FROM users WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(deleted.is_some())
    }
}
