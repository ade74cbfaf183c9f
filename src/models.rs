//! Row types and request DTOs.
//!
//! Each endpoint has its own typed body, deserialized with
//! `deny_unknown_fields` and presence-checked at the boundary before any
//! database call. Row structs derive `sqlx::FromRow` and serialize straight
//! to the response JSON; timestamps serialize as RFC 3339 strings.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One row of the chat listing: the chat joined with its author.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ChatLine {
    pub id: String,
    pub user_id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub user_name: String,
    pub user_avatar: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUser {
    pub id: Option<String>,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

/// A validated user insert. Id is caller-provided or generated here.
#[derive(Debug)]
pub struct NewUser {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
}

impl CreateUser {
    pub fn into_new(self) -> Result<NewUser, AppError> {
        require(&[("name", &self.name)])?;
        Ok(NewUser {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: self.name.unwrap_or_default(),
            avatar: self.avatar,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug)]
pub struct UserChanges {
    pub name: String,
    pub avatar: Option<String>,
}

impl UpdateUser {
    pub fn into_changes(self) -> Result<UserChanges, AppError> {
        require(&[("name", &self.name)])?;
        Ok(UserChanges {
            name: self.name.unwrap_or_default(),
            avatar: self.avatar,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateChat {
    pub user_id: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug)]
pub struct NewChat {
    pub user_id: String,
    pub message: String,
}

impl CreateChat {
    pub fn into_new(self) -> Result<NewChat, AppError> {
        require(&[("user_id", &self.user_id), ("message", &self.message)])?;
        Ok(NewChat {
            user_id: self.user_id.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateChat {
    pub message: Option<String>,
}

impl UpdateChat {
    pub fn into_message(self) -> Result<String, AppError> {
        require(&[("message", &self.message)])?;
        Ok(self.message.unwrap_or_default())
    }
}

/// Response for chat creation: generated id, echoed fields, server timestamp.
#[derive(Debug, Serialize)]
pub struct ChatCreated {
    pub id: String,
    pub user_id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "statusMessage")]
    pub status_message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Confirmation {
    pub message: &'static str,
}

/// Presence check. Absent, null, and empty-string values all count as missing;
/// the error names every missing field.
fn require(fields: &[(&'static str, &Option<String>)]) -> Result<(), AppError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, v)| v.as_deref().map_or(true, str::is_empty))
        .map(|(name, _)| *name)
        .collect();
    match missing.as_slice() {
        [] => Ok(()),
        [one] => Err(AppError::Validation(format!("{} is required", one))),
        many => Err(AppError::Validation(format!("{} are required", many.join(" and ")))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_requires_name() {
        let body: CreateUser = serde_json::from_str(r#"{"avatar": "a.png"}"#).unwrap();
        let err = body.into_new().unwrap_err();
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn create_user_generates_id_when_absent() {
        let body: CreateUser = serde_json::from_str(r#"{"name": "Alice"}"#).unwrap();
        let new = body.into_new().unwrap();
        assert!(Uuid::parse_str(&new.id).is_ok());
        assert_eq!(new.name, "Alice");
        assert_eq!(new.avatar, None);
    }

    #[test]
    fn create_user_keeps_caller_id() {
        let body: CreateUser = serde_json::from_str(r#"{"id": "u1", "name": "Alice"}"#).unwrap();
        assert_eq!(body.into_new().unwrap().id, "u1");
    }

    #[test]
    fn create_chat_names_all_missing_fields() {
        let body: CreateChat = serde_json::from_str("{}").unwrap();
        let err = body.into_new().unwrap_err();
        assert_eq!(err.to_string(), "user_id and message are required");
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let body: UpdateChat = serde_json::from_str(r#"{"message": ""}"#).unwrap();
        assert!(body.into_message().is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let res: Result<CreateChat, _> =
            serde_json::from_str(r#"{"user_id": "u1", "message": "hi", "extra": 1}"#);
        assert!(res.is_err());
    }
}
