//! HTTP surface for the users domain

pub mod handlers;
pub mod routes;

use crate::domain::validation::UserValidator;
use crate::repository::UserRepository;

pub use routes::routes;

/// Application state for the users domain
#[derive(Clone)]
pub struct UsersState {
    pub users: UserRepository,
    pub validator: UserValidator,
}
