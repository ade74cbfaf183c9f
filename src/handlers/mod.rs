//! HTTP handlers for the user and chat endpoints.

pub mod chats;
pub mod users;
