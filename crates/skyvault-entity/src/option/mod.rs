//! System option entities.

pub mod model;

pub use model::SystemOption;
