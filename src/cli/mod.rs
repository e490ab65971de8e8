//! # CLI Module
//!
//! Command implementations behind the `studentportal` binary. Each command
//! builds the client it needs from the environment configuration, runs one
//! operation behind a spinner and renders the envelope it gets back.
//!
//! ## Command Categories
//!
//! ### Admin
//!
//! - [`admin_login`], [`admin_logout`], [`admin_status`] - session handling
//! - [`dashboard`], [`chart`] - read-only statistics
//! - [`resource`] - CRUD on students, subjects, schedules, registrations and tuition fees
//! - [`export`] - spreadsheet downloads into a directory
//!
//! ### Student
//!
//! - [`student_login`], [`student_logout`], [`student_status`] - session handling
//! - [`student_info`], [`subjects`], [`registered`], [`schedule`], [`tuition`] - reads
//! - [`register`], [`cancel`] - registration changes
//! - [`pay`] - payment URL creation, optionally opened in the browser
//!
//! ## Sessions
//!
//! Login stores the returned session record through
//! [`crate::storage::SessionStorage`] on a [`FileStore`]. Every other command
//! of a role requires that session to exist. Student commands take the
//! student id from the session's `id` field unless one is passed explicitly.
//!
//! ## Output
//!
//! Arrays of objects are printed as tables, anything else as pretty JSON.
//! A failed envelope prints its status and message and exits with code 1.

use std::{future::Future, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use tabled::{builder::Builder, settings::Style};

use crate::{
    config::ApiConfig,
    error,
    storage::{FileStore, SessionStorage},
    transport::ReqwestTransport,
    types::ApiResponse,
};

mod admin;
mod student;

pub use admin::{Chart, Resource, ResourceAction};
pub use admin::{admin_login, admin_logout, admin_status, chart, dashboard, export, resource};
pub use student::{
    cancel, pay, register, registered, schedule, student_info, student_login, student_logout,
    student_status, subjects, tuition,
};

pub(crate) fn admin_api() -> crate::admin::AdminApi<ReqwestTransport> {
    crate::admin::AdminApi::new(ReqwestTransport::new(), ApiConfig::admin_from_env())
}

pub(crate) fn student_api() -> crate::student::StudentApi<ReqwestTransport> {
    crate::student::StudentApi::new(ReqwestTransport::new(), ApiConfig::student_from_env())
}

pub(crate) fn vnpay_api() -> crate::vnpay::VnpayApi<ReqwestTransport> {
    crate::vnpay::VnpayApi::new(ReqwestTransport::new(), ApiConfig::vnpay_from_env())
}

pub(crate) fn admin_session() -> SessionStorage<FileStore> {
    SessionStorage::admin(FileStore::from_env())
}

pub(crate) fn student_session() -> SessionStorage<FileStore> {
    SessionStorage::student(FileStore::from_env())
}

/// Exits unless a session is stored for the role behind `session`.
pub(crate) async fn require_session(session: &SessionStorage<FileStore>, login_hint: &str) {
    match session.is_logged_in().await {
        Ok(true) => {}
        Ok(false) => error!("Not logged in. Run studentportal {} login", login_hint),
        Err(e) => error!(
            "Stored {} session cannot be read: {}\nRun studentportal {} logout",
            session.key(),
            e,
            login_hint
        ),
    }
}

pub(crate) async fn with_spinner<F: Future>(message: &'static str, fut: F) -> F::Output {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let output = fut.await;
    pb.finish_and_clear();
    output
}

/// Returns the payload of a successful envelope, exits on failure.
pub(crate) fn expect_success(response: ApiResponse) -> Value {
    if response.success {
        return response.data;
    }

    let message = response
        .message()
        .map(String::from)
        .unwrap_or_else(|| response.data.to_string());
    error!("Request failed ({}): {}", response.status, message);
}

pub(crate) fn print_response(response: ApiResponse) {
    let data = expect_success(response);
    println!("{}", render(&data));
}

pub(crate) fn parse_body(data: &str) -> Value {
    match serde_json::from_str(data) {
        Ok(value) => value,
        Err(e) => error!("Invalid JSON body: {}", e),
    }
}

/// Renders response data for the terminal.
///
/// A non-empty array whose items are all objects becomes a table with one
/// column per key (taken in order of first appearance). Everything else is
/// pretty printed JSON.
pub fn render(data: &Value) -> String {
    let rows = match data.as_array() {
        Some(items) if !items.is_empty() && items.iter().all(Value::is_object) => items,
        _ => return serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string()),
    };

    let mut columns: Vec<&str> = Vec::new();
    for row in rows.iter().filter_map(Value::as_object) {
        for key in row.keys() {
            if !columns.contains(&key.as_str()) {
                columns.push(key);
            }
        }
    }

    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|c| c.to_string()));
    for row in rows {
        builder.push_record(columns.iter().map(|c| cell(row.get(*c))));
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
