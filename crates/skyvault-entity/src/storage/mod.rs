//! Storage domain entities.

pub mod mode;
pub mod model;
pub mod provider;

pub use mode::StorageMode;
pub use model::{BackendStatus, CreateBackend, StorageBackend};
pub use provider::ProviderKind;
