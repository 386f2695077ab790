//! Request body validation, run at the boundary before any SQL.

use crate::error::AppError;
use crate::model::UserInput;

/// Both fields are required non-empty strings. Content is not otherwise
/// validated; email uniqueness is the database's constraint.
pub fn validate_input(input: &UserInput) -> Result<(), AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".into()));
    }
    if input.email.trim().is_empty() {
        return Err(AppError::Validation("email is required".into()));
    }
    Ok(())
}
