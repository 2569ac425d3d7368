//! Spotify Track CLI Library
//!
//! This library backs a small command-line utility for the currently playing
//! Spotify track: fetch it, like it, or check whether it is already liked.
//! It authenticates with the OAuth 2.0 authorization-code flow and keeps the
//! resulting token fresh across invocations.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `cli` - Command registry and command implementations
//! - `config` - Environment, endpoint, and credential configuration
//! - `error` - Error kinds for a single invocation
//! - `management` - Token persistence and lifecycle
//! - `server` - Local HTTP server for the OAuth redirect
//! - `spotify` - Spotify Web API client (auth flow, token exchange, tracks)
//! - `types` - Data structures and type definitions

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;

/// Result type alias used throughout the crate.
///
/// Every fallible operation resolves to one of the error kinds in
/// [`error::Error`]; all of them are terminal for the current invocation.
pub type Res<T> = std::result::Result<T, error::Error>;

/// Prints an informational message with a blue bullet point.
///
/// The macro accepts the same arguments as `println!`.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// The macro accepts the same arguments as `println!`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark to stderr and exits
/// the program with a non-zero code.
///
/// Only for unrecoverable errors at the top level; code after this macro
/// does not execute.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// For recoverable issues the user should notice, like a browser that could
/// not be opened. The macro accepts the same arguments as `println!`.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
