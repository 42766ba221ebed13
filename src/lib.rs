//! Core library exports for the video collector.
//!
//! The `data` feature exposes the domain, persistence, search and form
//! layers. The default `server` feature adds view models, services and the
//! actix-web routes used by the binary.

pub mod db;
pub mod domain;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod schema;
pub mod search;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
