//! User service: HTTP CRUD over a single `users` table in PostgreSQL.

pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use error::AppError;
pub use model::{DeleteAck, User, UserInput};
pub use routes::{common_routes, common_routes_with_ready, user_routes};
pub use service::UserService;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_users_table};
