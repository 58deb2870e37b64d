//! Tracing setup for the caderno binaries.

pub mod logger;

pub use logger::{init_file_logger, init_logger};
