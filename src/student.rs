//! # Student Client
//!
//! Named operations against the student scope (`{api}/Student`).
//!
//! Registration and cancellation are independent one-shot calls. The client
//! keeps no record of what was registered, so a repeated
//! [`StudentApi::register_subject`] is forwarded as is and conflict
//! detection is left to the backend.

use std::fmt::Display;

use crate::{
    client::RequestHelper,
    config::ApiConfig,
    transport::HttpTransport,
    types::{
        ApiResponse, CancelRegistrationRequest, Method, RegisterSubjectRequest, StudentCredentials,
    },
};

#[derive(Debug, Clone)]
pub struct StudentApi<T> {
    helper: RequestHelper<T>,
}

impl<T: HttpTransport> StudentApi<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self {
            helper: RequestHelper::new(transport, config, "API"),
        }
    }

    /// Posts `{mssv, password}` to `/login`. On success `data` is the
    /// session record the caller may persist.
    pub async fn login(&self, mssv: &str, password: &str) -> ApiResponse {
        let credentials = StudentCredentials {
            mssv: mssv.to_string(),
            password: password.to_string(),
        };
        self.helper
            .send_json(Method::Post, "/login", &credentials)
            .await
    }

    pub async fn get_student_info(&self, id: impl Display) -> ApiResponse {
        self.helper.send(Method::Get, format!("/{id}")).await
    }

    pub async fn get_all_subjects(&self) -> ApiResponse {
        self.helper.send(Method::Get, "/subjects").await
    }

    pub async fn register_subject(&self, student_id: i64, subject_id: i64) -> ApiResponse {
        let body = RegisterSubjectRequest {
            student_id,
            subject_id,
        };
        self.helper
            .send_json(Method::Post, "/register-subject", &body)
            .await
    }

    pub async fn get_registered_subjects(&self, student_id: impl Display) -> ApiResponse {
        self.helper
            .send(Method::Get, format!("/{student_id}/registered-subjects"))
            .await
    }

    /// Cancels by the id of the student-subject link, not the subject id.
    pub async fn cancel_registration(&self, student_subject_id: i64) -> ApiResponse {
        let body = CancelRegistrationRequest { student_subject_id };
        self.helper
            .send_json(Method::Post, "/cancel-registration", &body)
            .await
    }

    pub async fn get_schedule(&self, student_id: impl Display) -> ApiResponse {
        self.helper
            .send(Method::Get, format!("/{student_id}/schedule"))
            .await
    }

    pub async fn get_tuition_fee(&self, student_id: impl Display) -> ApiResponse {
        self.helper
            .send(Method::Get, format!("/{student_id}/tuition-fee"))
            .await
    }
}
