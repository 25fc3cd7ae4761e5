//! Repository implementations for all SkyVault entities.

pub mod option;
pub mod storage;
pub mod user;

pub use option::OptionRepository;
pub use storage::StorageBackendRepository;
pub use user::UserRepository;
