//! Domain model definitions for the site's content and account records.

pub mod course;
pub mod physics_field;
pub mod user;

pub use course::{Course, Mode};
pub use physics_field::PhysicsField;
pub use user::{NewUser, User};

/// Returns the name of the first required text field that is blank.
///
/// Used when seeding a store, so a fixture with an empty title or overview is
/// rejected before it can be served.
pub(crate) fn first_blank<'a>(fields: &[(&'a str, &str)]) -> Option<&'a str> {
    fields
        .iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
}
