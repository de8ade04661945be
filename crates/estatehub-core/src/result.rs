//! Convenience result type alias for EstateHub.

use crate::error::AppError;

/// A specialized `Result` type for EstateHub operations.
pub type AppResult<T> = Result<T, AppError>;
