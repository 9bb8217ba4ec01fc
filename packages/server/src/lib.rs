// Volunteer Dispatch - API Core
//
// This crate provides the backend API for matching patients who need
// in-person help with nearby available volunteers. Architecture follows
// domain-driven design: models own SQL, actions own business rules, and
// the server layer exposes GraphQL over axum.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
