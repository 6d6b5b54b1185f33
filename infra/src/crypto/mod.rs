//! Password hashing implementations

mod password;

pub use password::BcryptPasswordHasher;
