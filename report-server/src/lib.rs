//! Campaign analytics report server
//!
//! Read-only marketing campaign reports (spend, investment, sales, coupons,
//! summaries) served from in-memory tables, plus a small mutable dashboard
//! widget configuration.
//!
//! # Module structure
//!
//! ```text
//! report-server/src/
//! ├── core/          # Config, state, server lifecycle
//! ├── store/         # Record tables and widget store
//! ├── services/      # Query pipelines and aggregation
//! ├── api/           # HTTP handlers
//! ├── routes/        # Router assembly and middleware layers
//! ├── middleware/    # Request logging
//! └── utils/         # Logging, dates, validation, extractors
//! ```

pub mod api;
pub mod core;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use routes::{build_app, build_router, with_layers};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::init_logger_with_file;
