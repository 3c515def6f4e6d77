//! HTTP presentation layer for Sattva
//!
//! Exposes the guidance pipeline, speech synthesis, knowledge planning,
//! and practice suggestions over an axum API.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
