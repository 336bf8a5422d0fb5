pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::model::{Course, Mode, NewUser, PhysicsField, User};
pub use storage::{MemStorage, Storage, StorageError};
