//! Resume form validation service.
//!
//! The validation engine lives in [`resume::validation`] and is pure; the
//! rest of the crate wraps it in an in-memory draft store and an axum API.

pub mod config;
pub mod errors;
pub mod models;
pub mod resume;
pub mod routes;
pub mod state;
