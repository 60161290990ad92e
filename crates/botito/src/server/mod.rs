//! REST API module for the Bot-ito service
//!
//! Wraps the text utilities and the sentiment scorer in axum routes, with
//! API-key authentication and a per-key usage quota in front of them.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod quota;
pub mod request_log;
pub mod routing;
pub mod startup;
pub mod state;
pub mod types;
