use serde::{Deserialize, Serialize};

/// An account record. No route exposes these.
///
/// The password is stored exactly as given; nothing in this crate hashes it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
}

/// Input for creating a [`User`]; the id is assigned by the store.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl User {
    pub fn from_new(id: String, new_user: NewUser) -> Self {
        Self {
            id,
            username: new_user.username,
            password: new_user.password,
        }
    }
}
