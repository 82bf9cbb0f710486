//! Core data layer of the AutoReal car-review application.
//!
//! Everything a presentation layer needs and nothing it renders: the
//! version-aware car catalog model, gallery photo aggregation, review
//! aggregation (common-fault ranking, optimistic reactions), the
//! session-scoped favorite gate, and typed clients for the external REST
//! backend.

pub mod catalog;
pub mod client;
pub mod config;
pub mod detail;
pub mod errors;
pub mod favorites;
pub mod gallery;
pub mod models;
pub mod reviews;
pub mod services;
pub mod session;
pub mod state;

pub use config::Config;
pub use errors::{Error, Result};
pub use session::Session;
pub use state::AppContext;
