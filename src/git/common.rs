//! Common git utilities and shared helpers
//!
//! This module contains utilities that are shared across the different
//! workflows, such as logging helpers.

use colored::*;

/// Logger for workflow steps with consistent formatting
///
/// Provides standardized logging methods so every workflow reports progress
/// the same way. Informational lines are plain, successes are green,
/// warnings yellow and errors red on stderr.
#[derive(Default)]
pub struct Logger;

impl Logger {
    pub fn info(&self, msg: &str) {
        println!("{msg}");
    }

    pub fn success(&self, msg: &str) {
        println!("{}", msg.green());
    }

    pub fn warn(&self, msg: &str) {
        println!("{}", msg.yellow());
    }

    pub fn error(&self, msg: &str) {
        eprintln!("{}", msg.red());
    }
}
