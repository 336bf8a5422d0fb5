//! Process-memory store backed by the shipped fixtures.

use crate::domain::fixtures;
use crate::domain::model::{Course, NewUser, PhysicsField, User};
use crate::storage::{Storage, StorageError};
use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory [`Storage`].
///
/// Courses and physics fields are fixed at construction and only ever read.
/// Users sit behind a lock in insertion order.
pub struct MemStorage {
    users: RwLock<Vec<User>>,
    courses: Vec<Course>,
    physics_fields: Vec<PhysicsField>,
}

impl MemStorage {
    /// Builds a store from the given collections.
    ///
    /// Rejects duplicate ids and blank required text fields.
    pub fn new(
        courses: Vec<Course>,
        physics_fields: Vec<PhysicsField>,
    ) -> Result<Self, StorageError> {
        let mut seen = HashSet::new();
        for course in &courses {
            if !seen.insert(course.id) {
                return Err(duplicate_id("course", course.id));
            }
            if let Some(field) = course.blank_required_field() {
                return Err(blank_field("course", course.id, field));
            }
        }

        seen.clear();
        for pf in &physics_fields {
            if !seen.insert(pf.id) {
                return Err(duplicate_id("physics field", pf.id));
            }
            if let Some(field) = pf.blank_required_field() {
                return Err(blank_field("physics field", pf.id, field));
            }
        }

        Ok(Self {
            users: RwLock::new(Vec::new()),
            courses,
            physics_fields,
        })
    }

    /// Store holding the shipped course and physics-field fixtures.
    pub fn seeded() -> Result<Self, StorageError> {
        Self::new(fixtures::courses(), fixtures::physics_fields())
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn physics_field_count(&self) -> usize {
        self.physics_fields.len()
    }
}

fn duplicate_id(entity: &'static str, id: i32) -> StorageError {
    StorageError::InvalidFixture {
        entity,
        id,
        reason: "duplicate id".to_string(),
    }
}

fn blank_field(entity: &'static str, id: i32, field: &str) -> StorageError {
    StorageError::InvalidFixture {
        entity,
        id,
        reason: format!("required field '{}' is empty", field),
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: &str) -> Result<Option<User>, StorageError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, StorageError> {
        let user = User::from_new(Uuid::new_v4().to_string(), new_user);

        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            // Kept as-is: lookups by username keep returning the older record.
            tracing::warn!(username = %user.username, "creating user with a username that already exists");
        }
        users.push(user.clone());
        tracing::debug!(id = %user.id, "user created");

        Ok(user)
    }

    async fn get_courses(&self) -> Result<Vec<Course>, StorageError> {
        Ok(self.courses.clone())
    }

    async fn get_physics_fields(&self) -> Result<Vec<PhysicsField>, StorageError> {
        Ok(self.physics_fields.clone())
    }
}
