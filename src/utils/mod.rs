//! Utility modules for common functionality

pub mod exit_codes;

// Re-export commonly used functions
pub use exit_codes::{describe_exit_status, get_exit_code_description};
