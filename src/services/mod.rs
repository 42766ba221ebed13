pub mod categories;
pub mod errors;
pub mod main;
pub mod search;
pub mod videos;

pub use errors::{ServiceError, ServiceResult};
