//! Spotify OAuth Server Library
//!
//! This library implements a small web server that signs a user in with
//! Spotify using the OAuth2 authorization code flow: it redirects the browser
//! to Spotify's consent screen, exchanges the returned code for an access
//! token and fetches the user's profile.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the index, login and callback routes
//! - `config` - Configuration loaded from environment variables and `.env` files
//! - `server` - Router construction and the HTTP server loop
//! - `spotify` - Outbound calls to the Spotify accounts and Web API services
//! - `types` - Data structures shared between the modules
//!
//! # Example
//!
//! ```
//! use spotify_oauth::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> spotify_oauth::Res<()> {
//!     config::load_env()?;
//!     let config = config::Config::from_env()?;
//!     server::start_api_server(config).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod server;
pub mod spotify;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Used for startup and serving plumbing where the caller only reports the
/// error. Request handling uses the typed errors in [`api`] and [`spotify`].
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used for fatal startup errors, the process terminates with exit
/// code 1 right after printing.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for request-level failures that are reported to the caller but do
/// not stop the server.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
