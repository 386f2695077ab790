//! UserService: single-row SQL operations against the `users` table.

mod users;
mod validation;
pub use users::UserService;
pub use validation::validate_input;
