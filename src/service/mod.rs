//! CRUD execution against PostgreSQL: one parameterized statement per operation.

pub mod chats;
pub mod users;

pub use chats::ChatService;
pub use users::UserService;
