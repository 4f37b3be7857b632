//! Project Listing Client Library
//!
//! Data-access layer for a project-listing application: fetches project
//! records from a configured API (or a local mock file when no API base is
//! set), normalizes the loosely-typed wire shape into a flat view model,
//! and provides upload and delete operations against the same API.
//!
//! # Modules
//!
//! - `client`: the [`ProjectClient`](client::ProjectClient) network operations.
//! - `config`: environment-backed configuration.
//! - `errors`: error taxonomy surfaced to callers.
//! - `models`: raw wire shapes, the API envelope, and the flattened
//!   view-model projection.

pub mod client;
pub mod config;
pub mod errors;
pub mod models;

pub use client::ProjectClient;
pub use config::Config;
pub use errors::ClientError;
pub use models::{Project, ProjectEnvelope, ProjectListItem};
