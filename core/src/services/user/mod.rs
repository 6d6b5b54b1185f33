//! User registration module

mod service;


pub use service::UserService;
