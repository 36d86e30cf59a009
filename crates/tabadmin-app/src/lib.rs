pub mod bootstrap;
pub mod error;
pub mod memory;
pub mod mfa;
pub mod seams;
pub mod snapshot;

pub use bootstrap::{Bootstrap, PUBLIC_SCHEMA};
pub use error::AppError;
pub use memory::{MemoryAuthStore, StaticReflector};
pub use mfa::{EncryptionKey, EncryptionKeySource, KEY_LEN};
pub use seams::{
    AdminAppFactory, AdminAppSpec, AdminProvisioned, AdminServer, AuthStore, SchemaReflector,
};
pub use snapshot::SchemaSnapshot;
