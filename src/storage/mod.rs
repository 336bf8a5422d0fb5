//! Storage contract for site content and accounts.

pub mod memory;

pub use memory::MemStorage;

use crate::domain::model::{Course, NewUser, PhysicsField, User};
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Seed data rejected while building a store.
    #[error("invalid {entity} fixture (id {id}): {reason}")]
    InvalidFixture {
        entity: &'static str,
        id: i32,
        reason: String,
    },
    /// Fault reported by a backing store.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Capability set every backend provides to the HTTP layer.
///
/// Handlers only ever see `Arc<dyn Storage>`, so an in-memory store can be
/// swapped for a persistent one without touching routing code.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Looks up a user by id. A missing user is `Ok(None)`, not an error.
    async fn get_user(&self, id: &str) -> Result<Option<User>, StorageError>;

    /// Returns the first user (in insertion order) with this username.
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;

    /// Stores a new user under a freshly generated id and returns it.
    ///
    /// Usernames are not checked for uniqueness.
    async fn create_user(&self, new_user: NewUser) -> Result<User, StorageError>;

    /// All courses, in seed order.
    async fn get_courses(&self) -> Result<Vec<Course>, StorageError>;

    /// All physics fields, in seed order.
    async fn get_physics_fields(&self) -> Result<Vec<PhysicsField>, StorageError>;
}
