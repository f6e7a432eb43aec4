//! Utility modules - logging, time parsing, input validation

pub mod logger;
pub mod time;
pub mod validation;

pub use logger::{init_logger, init_logger_with_file};
