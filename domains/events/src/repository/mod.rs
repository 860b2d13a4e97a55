//! Repository implementations for the events domain

pub mod categories;
pub mod events;

use sqlx::PgPool;

pub use categories::CategoryRepository;
pub use events::EventRepository;

/// Combined repository access for the events domain
#[derive(Clone)]
pub struct EventsRepositories {
    pub events: EventRepository,
    pub categories: CategoryRepository,
}

impl EventsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            events: EventRepository::new(pool.clone()),
            categories: CategoryRepository::new(pool),
        }
    }
}
