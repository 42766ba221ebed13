//! Diesel row models and their conversions to domain entities.

pub mod category;
pub mod config;
pub mod video;
