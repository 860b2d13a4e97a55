//! Repository implementations for the users domain

pub mod users;

pub use users::{UserRepository, UserStore};
