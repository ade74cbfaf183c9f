//! Chat table operations.

use crate::error::AppError;
use crate::models::{ChatCreated, ChatLine, NewChat};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ChatService;

impl ChatService {
    /// All chats joined with their author, oldest first. Ties on timestamp
    /// break by id so the order is stable. The inner join drops messages
    /// whose author no longer exists.
    pub async fn list_with_users(pool: &PgPool) -> Result<Vec<ChatLine>, AppError> {
        let rows = sqlx::query_as::<_, ChatLine>(
            r#"SELECT c.id, c.user_id, c.message, c."timestamp",
                      u.name AS user_name, u.avatar AS user_avatar
               FROM chats c
               JOIN users u ON c.user_id = u.id
               ORDER BY c."timestamp" ASC, c.id ASC"#,
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Insert one chat. Id and timestamp are generated here, at request time,
    /// not by the database.
    pub async fn create(pool: &PgPool, new: NewChat) -> Result<ChatCreated, AppError> {
        let id = Uuid::new_v4().to_string();
        let timestamp = Utc::now();
        tracing::debug!(id = %id, user_id = %new.user_id, "insert chat");
        sqlx::query(r#"INSERT INTO chats (id, user_id, message, "timestamp") VALUES ($1, $2, $3, $4)"#)
            .bind(&id)
            .bind(&new.user_id)
            .bind(&new.message)
            .bind(timestamp)
            .execute(pool)
            .await?;
        Ok(ChatCreated {
            id,
            user_id: new.user_id,
            message: new.message,
            timestamp,
            status_message: "Message sent successfully",
        })
    }

    /// Replace the message text by id. Returns the affected-row count.
    pub async fn update_message(pool: &PgPool, id: &str, message: &str) -> Result<u64, AppError> {
        tracing::debug!(id = %id, "update chat");
        let result = sqlx::query("UPDATE chats SET message = $1 WHERE id = $2")
            .bind(message)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete by id. Returns the affected-row count.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<u64, AppError> {
        tracing::debug!(id = %id, "delete chat");
        let result = sqlx::query("DELETE FROM chats WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
