//! Student Portal Client Library
//!
//! This library provides a client layer for the student management portal
//! backend. It wraps the admin and student REST endpoints, the payment
//! gateway proxy, spreadsheet exports and local session persistence behind
//! injected transport and storage capabilities.
//!
//! # Modules
//!
//! - `admin` - Admin endpoints (CRUD, dashboard, charts, exports)
//! - `cli` - Command-line interface implementations
//! - `client` - Generic request helper producing result envelopes
//! - `config` - Configuration management and environment variables
//! - `export` - Spreadsheet export flow and download targets
//! - `storage` - Session storage on top of a key-value store
//! - `student` - Student endpoints
//! - `transport` - HTTP transport capability and its reqwest implementation
//! - `types` - Data structures and type definitions
//! - `vnpay` - Payment gateway proxy
//!
//! # Example
//!
//! ```
//! use studentportal::{admin::AdminApi, config::{self, ApiConfig}, transport::ReqwestTransport};
//!
//! #[tokio::main]
//! async fn main() -> studentportal::Res<()> {
//!     config::load_env().await?;
//!     let admin = AdminApi::new(ReqwestTransport::new(), ApiConfig::admin_from_env());
//!     let stats = admin.get_dashboard_stats().await;
//!     println!("{}", stats.status);
//!     Ok(())
//! }
//! ```

pub mod admin;
pub mod cli;
pub mod client;
pub mod config;
pub mod export;
pub mod storage;
pub mod student;
pub mod transport;
pub mod types;
pub mod vnpay;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use studentportal::Res;
///
/// async fn load_session() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational line prefixed with a blue `o`.
///
/// Accepts the same arguments as `println!`.
///
/// ```
/// info!("Connecting to {}", base_url);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success line prefixed with a green checkmark.
///
/// ```
/// success!("Saved {}", file_name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error line prefixed with a red `!` and exits with code 1.
///
/// Only meant for the command-line layer. Client operations never call it,
/// they report failures through their result values instead.
///
/// ```
/// error!("Not logged in. Run studentportal admin login");
/// // unreachable from here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning line prefixed with a yellow `!` to stderr.
///
/// Client operations use it to trace faults they convert into failure
/// envelopes, so stdout stays reserved for command output.
///
/// ```
/// warning!("Admin API error: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
