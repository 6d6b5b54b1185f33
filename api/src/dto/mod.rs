//! Request and response bodies

pub mod error;
pub mod user_dto;

pub use error::{ErrorResponse, ErrorResponseExt};
