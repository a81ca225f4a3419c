//! Core request model for the Telegram Bot API sender.
//!
//! This crate is intentionally transport-agnostic. The HTTP client lives
//! behind the [`transport::Transport`] port, implemented in adapter crates;
//! request types only describe the call they want to make.

pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod session;
pub mod transport;

pub use errors::{Error, Result};

/// Root of the Bot API URL template. A session appends `<token>/<method>`.
pub const API_ROOT_URL: &str = "https://api.telegram.org/bot";
