//! # HTTP Server Module
//!
//! Transport adapter exposing the revision store over HTTP.
//!
//! The core is transport-agnostic; this module maps the store operations
//! onto an axum router:
//!
//! - `GET /` - current content and digest
//! - `POST /` - append new content
//! - `GET /history` - full revision history, oldest first
//! - `GET /health` - health check

pub mod config;
pub mod document_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use document_routes::{document_routes, DocumentState};
pub use server::HttpServer;
