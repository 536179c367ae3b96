//! Core module - server configuration, state and lifecycle
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - shared handler state
//! - [`Server`] - HTTP server
//! - [`ServerError`] - startup and serve errors

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::{Result, Server, ServerError};
pub use state::ServerState;
