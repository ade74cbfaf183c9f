//! Chat gateway: REST CRUD over users and chats with a static front-end fallback.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use error::AppError;
pub use routes::{api_routes, app};
pub use service::{ChatService, UserService};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
