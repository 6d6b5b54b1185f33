//! PostgreSQL implementations of the core repository traits

mod token_repository_impl;
mod user_repository_impl;

pub use token_repository_impl::PgTokenRepository;
pub use user_repository_impl::PgUserRepository;

use gk_core::errors::DomainError;

/// Map a SQLx error to a domain error
///
/// Unique violations become `Conflict`; everything else is a
/// `Persistence` failure carrying `context` for the server log.
pub(crate) fn map_sqlx_error(context: &str, error: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.is_unique_violation() {
            return DomainError::Conflict {
                message: format!("{}: unique constraint violated", context),
            };
        }
    }

    DomainError::Persistence {
        message: format!("{}: {}", context, error),
    }
}
