//! Observability
//!
//! Logging goes through `tracing` everywhere in the crate. This module only
//! configures and installs the subscriber; HTTP request spans come from
//! `tower_http::trace::TraceLayer` in the server.

mod logger;

pub use logger::{build_env_filter, init_logging, LogFormat, LoggingConfig, LoggingError};
