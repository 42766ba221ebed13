//! Persistence-independent entities and value objects.

pub mod category;
pub mod types;
pub mod video;
