//! HTTP API
//!
//! - [`health`] - banner and health check
//! - [`reports`] - expense and investment reports
//! - [`campaigns`] - per-campaign data and summaries
//! - [`dashboard`] - widget configuration and catalogs
//!
//! Successful responses are plain JSON shapes. Errors use the
//! [`ApiResponse`](crate::utils::ApiResponse) envelope.

pub mod campaigns;
pub mod dashboard;
pub mod health;
pub mod reports;
