//! Shared utilities for the Meiro workspace.
//!
//! Cross-cutting concerns that every member crate needs: logging
//! initialization and timestamp helpers.

pub mod logger;
pub mod time;

pub use logger::init_logger;
pub use time::{get_jst_timestamp, timestamp_to_jst_rfc3339};
