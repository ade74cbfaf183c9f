//! User table operations.

use crate::error::AppError;
use crate::models::{NewUser, User, UserChanges};
use sqlx::PgPool;

pub struct UserService;

impl UserService {
    /// All users in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, User>(
            "SELECT id, name, avatar, created_at FROM users ORDER BY created_at, id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn get(pool: &PgPool, id: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, User>(
            "SELECT id, name, avatar, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Insert one user and return the created row.
    pub async fn create(pool: &PgPool, new: NewUser) -> Result<User, AppError> {
        tracing::debug!(id = %new.id, "insert user");
        let row = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, avatar) VALUES ($1, $2, $3) \
             RETURNING id, name, avatar, created_at",
        )
        .bind(&new.id)
        .bind(&new.name)
        .bind(&new.avatar)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// Full-field update by id. Returns the affected-row count.
    pub async fn update(pool: &PgPool, id: &str, changes: UserChanges) -> Result<u64, AppError> {
        tracing::debug!(id = %id, "update user");
        let result = sqlx::query("UPDATE users SET name = $1, avatar = $2 WHERE id = $3")
            .bind(&changes.name)
            .bind(&changes.avatar)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete by id. Returns the affected-row count.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<u64, AppError> {
        tracing::debug!(id = %id, "delete user");
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
