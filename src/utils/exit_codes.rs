//! Exit code utilities and mappings

use std::process::ExitStatus;

/// Get a human-readable description for an exit code
pub fn get_exit_code_description(exit_code: i32) -> &'static str {
    match exit_code {
        0 => "success",
        1 => "general error",
        2 => "shell builtin misuse",
        126 => "command invoked cannot execute",
        127 => "command not found",
        128 => "invalid argument to exit",
        130 => "script terminated by Control-C",
        131..=255 => "terminated by signal",
        _ => "error",
    }
}

/// Describe the exit status of a finished process
///
/// A process killed by a signal has no exit code on Unix.
pub fn describe_exit_status(status: &ExitStatus) -> &'static str {
    match status.code() {
        Some(code) => get_exit_code_description(code),
        None => "terminated by signal",
    }
}
