//! Configuration management for the student portal client.
//!
//! This module loads configuration values from environment variables and an
//! optional `.env` file, and builds the explicit [`ApiConfig`] values the
//! clients are constructed from. Nothing in the client layer reads the
//! environment on its own; callers build an `ApiConfig` (from the
//! environment or by hand) and pass it in.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Built-in defaults

use std::{env, path::PathBuf};

/// Default root of the backend API. The three clients append `/Admin`,
/// `/Student` and `/Vnpay` to it.
pub const DEFAULT_API_URL: &str = "http://localhost:5117/api";

pub const API_URL_VAR: &str = "STUDENTPORTAL_API_URL";
pub const SESSION_DIR_VAR: &str = "STUDENTPORTAL_SESSION_DIR";
pub const DOWNLOAD_DIR_VAR: &str = "STUDENTPORTAL_DOWNLOAD_DIR";

const APP_DIR: &str = "studentportal";

/// Base URL and default headers for one API scope.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub headers: Vec<(String, String)>,
}

impl ApiConfig {
    /// Creates a configuration with the JSON content-type and accept headers
    /// every JSON call carries.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            headers: default_headers(),
        }
    }

    pub fn admin(api_url: &str) -> Self {
        Self::scoped(api_url, "Admin")
    }

    pub fn student(api_url: &str) -> Self {
        Self::scoped(api_url, "Student")
    }

    pub fn vnpay(api_url: &str) -> Self {
        Self::scoped(api_url, "Vnpay")
    }

    pub fn admin_from_env() -> Self {
        Self::admin(&api_url())
    }

    pub fn student_from_env() -> Self {
        Self::student(&api_url())
    }

    pub fn vnpay_from_env() -> Self {
        Self::vnpay(&api_url())
    }

    /// Joins a path suffix such as `/students/3` onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn scoped(api_url: &str, scope: &str) -> Self {
        Self::new(format!("{}/{}", api_url.trim_end_matches('/'), scope))
    }
}

fn default_headers() -> Vec<(String, String)> {
    vec![
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Accept".to_string(), "application/json".to_string()),
    ]
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The directory is created when missing so the build script and the user
/// have a stable place for the file:
/// - Linux: `~/.local/share/studentportal/.env`
/// - macOS: `~/Library/Application Support/studentportal/.env`
/// - Windows: `%LOCALAPPDATA%/studentportal/.env`
///
/// A missing `.env` file is not an error, every variable has a default.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file exists
/// but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = app_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Root of the backend API, from `STUDENTPORTAL_API_URL`.
pub fn api_url() -> String {
    env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Directory holding the persisted session records.
pub fn session_dir() -> PathBuf {
    match env::var(SESSION_DIR_VAR) {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => app_dir().join("session"),
    }
}

/// Directory exported spreadsheets are written to.
pub fn download_dir() -> PathBuf {
    env::var(DOWNLOAD_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

fn app_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}
